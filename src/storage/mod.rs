use std::{fs, path::Path};

use crate::{errors::LedgerError, ledger::Ledger};

const STAGING_EXTENSION: &str = "tmp";

/// Snapshots the ledger as pretty JSON.
///
/// The snapshot is staged to a sibling file and renamed into place, so a
/// failure mid-write never clobbers an existing snapshot.
pub fn save_ledger_to_file(ledger: &Ledger, path: &Path) -> Result<(), LedgerError> {
    let staged = path.with_extension(STAGING_EXTENSION);
    fs::write(&staged, serde_json::to_string_pretty(ledger)?)?;
    fs::rename(staged, path)?;
    Ok(())
}

/// Reads a ledger snapshot back, rejecting schema versions newer than this
/// crate supports.
pub fn load_ledger_from_file(path: &Path) -> Result<Ledger, LedgerError> {
    let ledger: Ledger = serde_json::from_str(&fs::read_to_string(path)?)?;
    ledger.ensure_schema_support()?;
    Ok(ledger)
}
