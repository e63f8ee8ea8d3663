//! Ledger domain models and helpers.

pub mod account;
pub mod common;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use account::{AccountNumber, LedgerAccount};
pub use ledger::{Ledger, CURRENT_SCHEMA_VERSION};
