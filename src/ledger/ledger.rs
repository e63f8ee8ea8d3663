use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::LedgerAccount;
use crate::errors::LedgerError;

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Owns a set of accounts and the timestamps tracking their mutation.
///
/// All account state lives here explicitly; nothing in the crate keeps
/// process-wide mutable balances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<LedgerAccount>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            accounts: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }

    pub fn add_account(&mut self, account: LedgerAccount) {
        self.accounts.push(account);
        self.touch();
    }

    pub fn account(&self, id: Uuid) -> Option<&LedgerAccount> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn account_mut(&mut self, id: Uuid) -> Option<&mut LedgerAccount> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    /// Bumps `updated_at` after a successful mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Rejects snapshots written by a newer crate than this one supports.
    pub fn ensure_schema_support(&self) -> Result<(), LedgerError> {
        if self.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(LedgerError::UnsupportedSchema {
                found: self.schema_version,
                supported: CURRENT_SCHEMA_VERSION,
            });
        }
        Ok(())
    }
}
