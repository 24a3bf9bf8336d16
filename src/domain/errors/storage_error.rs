//! Key-value storage error types.

use thiserror::Error;

/// Key-value storage error variants.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read stored value: {0}")]
    ReadFailed(String),

    #[error("failed to write stored value: {0}")]
    WriteFailed(String),

    #[error("failed to remove stored value: {0}")]
    RemoveFailed(String),

    #[error("storage not available: {0}")]
    NotAvailable(String),
}
