use uuid::Uuid;

use crate::ledger::{AccountNumber, Ledger, LedgerAccount};

use super::{ServiceError, ServiceResult};

pub struct AccountService;

impl AccountService {
    /// Opens a new account in the ledger and returns its identifier.
    ///
    /// Account numbers are unique per ledger; a negative initial balance is
    /// clamped to zero by the account constructor.
    pub fn open(
        ledger: &mut Ledger,
        number: AccountNumber,
        initial_cents: i64,
    ) -> ServiceResult<Uuid> {
        Self::validate_number(ledger, &number)?;
        let account = LedgerAccount::new(number, initial_cents);
        let id = account.id;
        ledger.add_account(account);
        Ok(id)
    }

    pub fn deposit(ledger: &mut Ledger, id: Uuid, amount_cents: i64) -> ServiceResult<i64> {
        let account = Self::resolve_mut(ledger, id)?;
        let new_balance = account.deposit(amount_cents)?;
        ledger.touch();
        Ok(new_balance)
    }

    pub fn withdraw(ledger: &mut Ledger, id: Uuid, amount_cents: i64) -> ServiceResult<i64> {
        let account = Self::resolve_mut(ledger, id)?;
        let new_balance = account.withdraw(amount_cents)?;
        ledger.touch();
        Ok(new_balance)
    }

    pub fn balance(ledger: &Ledger, id: Uuid) -> ServiceResult<i64> {
        let account = ledger
            .account(id)
            .ok_or_else(|| ServiceError::Invalid("Account not found".into()))?;
        Ok(account.balance_cents())
    }

    pub fn list(ledger: &Ledger) -> Vec<&LedgerAccount> {
        ledger.accounts.iter().collect()
    }

    fn resolve_mut(ledger: &mut Ledger, id: Uuid) -> ServiceResult<&mut LedgerAccount> {
        ledger
            .account_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Account not found".into()))
    }

    fn validate_number(ledger: &Ledger, candidate: &AccountNumber) -> ServiceResult<()> {
        let duplicate = ledger
            .accounts
            .iter()
            .any(|account| account.number == *candidate);
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Account `{}` already exists",
                candidate.masked()
            )))
        } else {
            Ok(())
        }
    }
}
