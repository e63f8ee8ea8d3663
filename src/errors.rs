use thiserror::Error;

/// Error type that captures validation rejections and storage failures.
///
/// Rejections are recoverable by construction: the guarded operation that
/// produced one has not mutated any state.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("amount must be positive, got {amount_cents}")]
    NonPositiveAmount { amount_cents: i64 },
    #[error("insufficient funds: requested {requested_cents}, available {available_cents}")]
    InsufficientFunds {
        requested_cents: i64,
        available_cents: i64,
    },
    #[error("raise percentage must be positive, got {0}")]
    InvalidPercentage(f64),
    #[error("ledger schema v{found} is newer than supported v{supported}")]
    UnsupportedSchema { found: u8, supported: u8 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
