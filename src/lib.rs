#![doc(test(attr(deny(warnings))))]

//! Ledger Core offers a guarded account-ledger primitive: balances that can
//! only change through validated deposit and withdraw operations, with masked
//! display of account numbers.

pub mod cli;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod payroll;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Core tracing initialized.");
    });
}
