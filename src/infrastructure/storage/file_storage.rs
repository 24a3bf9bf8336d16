//! JSON-file key-value storage.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::errors::StorageError;
use crate::domain::ports::SessionStoragePort;

/// File name used inside the data directory.
pub const SESSION_FILE_NAME: &str = "session.json";

type Items = BTreeMap<String, String>;

/// Key-value storage persisted as one JSON object on disk.
pub struct FileSessionStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStorage {
    /// Creates storage backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Creates storage at `<dir>/session.json`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SESSION_FILE_NAME))
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the raw file. A missing file reads as `None`.
    async fn read_content(&self) -> std::io::Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn read_items(&self) -> Result<Items, StorageError> {
        let Some(content) = self
            .read_content()
            .await
            .map_err(|e| StorageError::ReadFailed(e.to_string()))?
        else {
            return Ok(Items::new());
        };

        serde_json::from_str(&content).map_err(|e| StorageError::ReadFailed(e.to_string()))
    }

    /// Reads the current items before a write.
    ///
    /// Malformed JSON is discarded so the write can replace it. I/O errors
    /// are returned: the file may still hold data we cannot see.
    async fn read_items_for_update(&self) -> std::io::Result<Items> {
        let Some(content) = self.read_content().await? else {
            return Ok(Items::new());
        };

        match serde_json::from_str(&content) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Discarding malformed session file");
                Ok(Items::new())
            }
        }
    }

    fn write_items(&self, items: &Items) -> Result<(), StorageError> {
        let content =
            serde_json::to_string_pretty(items).map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        let parent = self
            .path
            .parent()
            .ok_or_else(|| StorageError::WriteFailed("invalid session path".to_string()))?;
        std::fs::create_dir_all(parent).map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        temp_file
            .persist(&self.path)
            .map_err(|e| StorageError::WriteFailed(e.error.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl SessionStoragePort for FileSessionStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        debug!(path = %self.path.display(), key, "Reading stored value");
        Ok(self.read_items().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self
            .read_items_for_update()
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        items.insert(key.to_string(), value.to_string());
        self.write_items(&items)?;
        debug!(key, "Stored value written");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self
            .read_items_for_update()
            .await
            .map_err(|e| StorageError::RemoveFailed(e.to_string()))?;
        if items.remove(key).is_none() {
            debug!(key, "Nothing to remove");
            return Ok(());
        }
        self.write_items(&items)
            .map_err(|e| StorageError::RemoveFailed(e.to_string()))?;
        debug!(key, "Stored value removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{SESSION_KEY, SessionStore};
    use crate::domain::entities::{Role, User};
    use std::sync::Arc;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::in_dir(dir.path());

        assert_eq!(storage.get_item(SESSION_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_get_remove() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::in_dir(&dir.path().join("nested"));

        storage.set_item("user", "{}").await.unwrap();
        storage.set_item("other", "x").await.unwrap();
        assert_eq!(storage.get_item("user").await.unwrap().as_deref(), Some("{}"));

        storage.remove_item("user").await.unwrap();
        assert_eq!(storage.get_item("user").await.unwrap(), None);
        assert_eq!(storage.get_item("other").await.unwrap().as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_session_survives_restart() {
        let dir = tempdir().unwrap();
        let user = User::new("2", "user@example.com", Role::User);

        let first = SessionStore::new(Arc::new(FileSessionStorage::in_dir(dir.path())));
        first.set_current_user(Some(user.clone())).await;

        let second = SessionStore::new(Arc::new(FileSessionStorage::in_dir(dir.path())));
        assert_eq!(second.load().await, Some(user));
    }

    #[tokio::test]
    async fn test_corrupt_file_means_no_session() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::in_dir(dir.path());
        std::fs::write(storage.path(), "definitely not json").unwrap();

        assert!(storage.get_item(SESSION_KEY).await.is_err());

        let store = SessionStore::new(Arc::new(storage));
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn test_malformed_session_value_means_no_session() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::in_dir(dir.path());
        storage.set_item(SESSION_KEY, "not-a-user").await.unwrap();

        let store = SessionStore::new(Arc::new(storage));
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn test_write_recovers_from_corrupt_file() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::in_dir(dir.path());
        std::fs::write(storage.path(), "[").unwrap();

        storage.set_item("user", "v").await.unwrap();

        assert_eq!(storage.get_item("user").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_unreadable_file_is_not_overwritten() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::in_dir(dir.path());
        std::fs::create_dir_all(storage.path()).unwrap();

        let set = storage.set_item("user", "v").await;
        assert!(matches!(set, Err(StorageError::WriteFailed(_))));

        let remove = storage.remove_item("user").await;
        assert!(matches!(remove, Err(StorageError::RemoveFailed(_))));

        assert!(storage.path().is_dir());
    }
}
