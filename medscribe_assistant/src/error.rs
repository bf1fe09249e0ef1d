use medscribe_store::StoreError;
use thiserror::Error;

/// Errors that can occur during intake or question answering.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Provider error: {0}")]
    Provider(#[from] anyhow::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
