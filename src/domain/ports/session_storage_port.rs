//! Key-value session storage port definition.

use async_trait::async_trait;

use crate::domain::errors::StorageError;

/// Port for the string key-value store that keeps the session blob.
#[async_trait]
pub trait SessionStoragePort: Send + Sync {
    /// Retrieves the value stored under `key`.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key succeeds.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Checks if `key` holds a value.
    async fn has_item(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get_item(key).await?.is_some())
    }
}
