use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::ledger::common::{Displayable, Identifiable};
use crate::utils::format_cents;

const MASK_PREFIX: &str = "XXXX";
const VISIBLE_SUFFIX_LEN: usize = 6;

/// Opaque account number, masked whenever it is displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the display form: a fixed prefix plus the last six characters.
    ///
    /// Numbers shorter than six characters are shown in full after the
    /// prefix; masking never fails.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let start = chars.len().saturating_sub(VISIBLE_SUFFIX_LEN);
        let suffix: String = chars[start..].iter().collect();
        format!("{MASK_PREFIX}{suffix}")
    }
}

/// A monetary balance that only changes through validated operations.
///
/// The balance is integer cents and stays non-negative: a withdrawal that
/// would overdraw is rejected without mutating the account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerAccount {
    pub id: Uuid,
    pub number: AccountNumber,
    balance_cents: i64,
}

impl LedgerAccount {
    /// Creates a new account holding `initial_cents`.
    ///
    /// A negative initial balance is clamped to zero with a logged warning;
    /// the account number is retained unchanged.
    pub fn new(number: AccountNumber, initial_cents: i64) -> Self {
        let balance_cents = if initial_cents < 0 {
            tracing::warn!(
                account = %number.masked(),
                initial_cents,
                "initial balance cannot be negative, setting to 0"
            );
            0
        } else {
            initial_cents
        };
        Self {
            id: Uuid::new_v4(),
            number,
            balance_cents,
        }
    }

    /// Adds `amount_cents` to the balance and returns the new balance.
    pub fn deposit(&mut self, amount_cents: i64) -> Result<i64, LedgerError> {
        if amount_cents <= 0 {
            return Err(LedgerError::NonPositiveAmount { amount_cents });
        }
        self.balance_cents += amount_cents;
        Ok(self.balance_cents)
    }

    /// Removes `amount_cents` from the balance and returns the new balance.
    ///
    /// Rejected with `InsufficientFunds` when the amount exceeds the balance.
    pub fn withdraw(&mut self, amount_cents: i64) -> Result<i64, LedgerError> {
        if amount_cents <= 0 {
            return Err(LedgerError::NonPositiveAmount { amount_cents });
        }
        if amount_cents > self.balance_cents {
            return Err(LedgerError::InsufficientFunds {
                requested_cents: amount_cents,
                available_cents: self.balance_cents,
            });
        }
        self.balance_cents -= amount_cents;
        Ok(self.balance_cents)
    }

    pub fn balance_cents(&self) -> i64 {
        self.balance_cents
    }

    pub fn masked_number(&self) -> String {
        self.number.masked()
    }
}

impl Identifiable for LedgerAccount {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for LedgerAccount {
    fn display_label(&self) -> String {
        format!("{} ({})", self.masked_number(), format_cents(self.balance_cents))
    }
}
