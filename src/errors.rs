use thiserror::Error;

/// Error type that captures ledger and report failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid date `{0}`: expected DD.MM.YYYY")]
    Parse(String),
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Config(err.to_string())
    }
}
