use thiserror::Error;

/// Error type that captures ledger persistence and reference failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Ledger `{0}` not found")]
    NotFound(String),
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
}
