use ledger_core::core::services::AccountService;
use ledger_core::errors::LedgerError;
use ledger_core::ledger::{AccountNumber, Ledger, CURRENT_SCHEMA_VERSION};
use ledger_core::storage::{load_ledger_from_file, save_ledger_to_file};

#[test]
fn save_then_load_restores_accounts_and_balances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let mut ledger = Ledger::new("Household");
    let id = AccountService::open(&mut ledger, AccountNumber::new("125478598745214"), 5000)
        .unwrap();
    AccountService::deposit(&mut ledger, id, 50000).unwrap();

    save_ledger_to_file(&ledger, &path).unwrap();
    let restored = load_ledger_from_file(&path).unwrap();

    assert_eq!(restored.name, "Household");
    assert_eq!(restored.accounts.len(), 1);
    assert_eq!(AccountService::balance(&restored, id).unwrap(), 55000);
}

#[test]
fn save_does_not_leave_a_staging_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let ledger = Ledger::new("Empty");
    save_ledger_to_file(&ledger, &path).unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn load_from_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = load_ledger_from_file(&path).unwrap_err();

    assert!(matches!(err, LedgerError::Io(_)));
}

#[test]
fn snapshot_from_a_newer_schema_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let mut ledger = Ledger::new("Future");
    ledger.schema_version = CURRENT_SCHEMA_VERSION + 1;
    save_ledger_to_file(&ledger, &path).unwrap();

    let err = load_ledger_from_file(&path).unwrap_err();

    assert!(matches!(
        err,
        LedgerError::UnsupportedSchema {
            found,
            supported: CURRENT_SCHEMA_VERSION,
        } if found == CURRENT_SCHEMA_VERSION + 1
    ));
}

#[test]
fn snapshot_missing_schema_version_defaults_to_supported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let mut ledger = Ledger::new("Legacy");
    AccountService::open(&mut ledger, AccountNumber::new("125478598745214"), 5000).unwrap();
    let mut snapshot = serde_json::to_value(&ledger).unwrap();
    snapshot.as_object_mut().unwrap().remove("schema_version");
    std::fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();

    let restored = load_ledger_from_file(&path).unwrap();

    assert_eq!(restored.schema_version, CURRENT_SCHEMA_VERSION);
    assert_eq!(restored.accounts.len(), 1);
}
