use ledger_core::errors::LedgerError;
use ledger_core::ledger::{AccountNumber, LedgerAccount};

fn account(number: &str, initial_cents: i64) -> LedgerAccount {
    LedgerAccount::new(AccountNumber::new(number), initial_cents)
}

#[test]
fn deposit_increases_balance() {
    let mut checking = account("125478598745214", 5000);

    let new_balance = checking.deposit(50000).unwrap();

    assert_eq!(new_balance, 55000);
    assert_eq!(checking.balance_cents(), 55000);
}

#[test]
fn non_positive_deposit_is_rejected() {
    let mut checking = account("125478598745214", 5000);

    for amount in [0, -25] {
        let err = checking.deposit(amount).unwrap_err();
        assert!(matches!(err, LedgerError::NonPositiveAmount { .. }));
        assert_eq!(checking.balance_cents(), 5000);
    }
}

#[test]
fn withdraw_decreases_balance_by_exact_amount() {
    let mut wallet = account("500023114785996", 1000);

    let new_balance = wallet.withdraw(200).unwrap();

    assert_eq!(new_balance, 800);
}

#[test]
fn overdraw_is_rejected_and_balance_unchanged() {
    let mut wallet = account("500023114785996", 1000);
    wallet.withdraw(200).unwrap();

    let err = wallet.withdraw(2000).unwrap_err();

    assert!(matches!(
        err,
        LedgerError::InsufficientFunds {
            requested_cents: 2000,
            available_cents: 800,
        }
    ));
    assert_eq!(wallet.balance_cents(), 800);
}

#[test]
fn non_positive_withdrawal_is_rejected() {
    let mut wallet = account("500023114785996", 1000);

    let err = wallet.withdraw(0).unwrap_err();

    assert!(matches!(err, LedgerError::NonPositiveAmount { .. }));
    assert_eq!(wallet.balance_cents(), 1000);
}

#[test]
fn negative_initial_balance_is_clamped_to_zero() {
    let checking = account("125478598745214", -500);

    assert_eq!(checking.balance_cents(), 0);
    assert_eq!(checking.number.as_str(), "125478598745214");
}

#[test]
fn balance_never_goes_negative_across_mixed_operations() {
    let mut wallet = account("500023114785996", 300);

    let _ = wallet.deposit(-10);
    let _ = wallet.withdraw(400);
    let _ = wallet.withdraw(300);
    let _ = wallet.withdraw(1);

    assert!(wallet.balance_cents() >= 0);
    assert_eq!(wallet.balance_cents(), 0);
}

#[test]
fn masked_number_keeps_last_six_characters() {
    let number = AccountNumber::new("125478598745214");

    assert_eq!(number.masked(), "XXXX745214");
}

#[test]
fn short_numbers_are_masked_in_full() {
    assert_eq!(AccountNumber::new("745214").masked(), "XXXX745214");
    assert_eq!(AccountNumber::new("42").masked(), "XXXX42");
    assert_eq!(AccountNumber::new("").masked(), "XXXX");
}
