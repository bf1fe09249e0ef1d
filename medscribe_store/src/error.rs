use thiserror::Error;

/// Errors raised by the record log. Storage failures are fatal to the
/// enclosing request; there is no partial-success mode.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
