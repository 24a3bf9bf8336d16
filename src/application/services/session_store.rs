//! Client-side record of the logged-in user.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::domain::entities::User;
use crate::domain::ports::SessionStoragePort;

/// Storage key holding the JSON-encoded current user.
pub const SESSION_KEY: &str = "user";

/// Holds at most one user and mirrors it into key-value storage.
///
/// Storage failures never reach the caller: they are logged and the store
/// behaves as if no session were persisted.
pub struct SessionStore {
    storage: Arc<dyn SessionStoragePort>,
    current: RwLock<Option<User>>,
    loading: AtomicBool,
}

impl SessionStore {
    /// Creates an empty store. Call [`SessionStore::load`] once at startup.
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStoragePort>) -> Self {
        Self {
            storage,
            current: RwLock::new(None),
            loading: AtomicBool::new(true),
        }
    }

    /// Restores the persisted user, if any.
    ///
    /// A missing key, an unreadable store, and a malformed value all result
    /// in an empty session.
    pub async fn load(&self) -> Option<User> {
        debug!(key = SESSION_KEY, "Restoring session from storage");

        let restored = match self.storage.get_item(SESSION_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!(user_id = %user.id(), role = %user.role(), "Session restored");
                    Some(user)
                }
                Err(e) => {
                    warn!(error = %e, "Stored session is malformed, ignoring");
                    None
                }
            },
            Ok(None) => {
                debug!("No stored session");
                None
            }
            Err(e) => {
                error!(error = %e, "Failed to read stored session");
                None
            }
        };

        *self.current.write().await = restored.clone();
        self.loading.store(false, Ordering::SeqCst);
        restored
    }

    /// Returns whether the startup load is still pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Returns the logged-in user.
    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    /// Replaces the logged-in user and persists the change.
    ///
    /// `None` logs out locally and removes the stored entry.
    pub async fn set_current_user(&self, user: Option<User>) {
        *self.current.write().await = user.clone();

        match user {
            Some(user) => self.persist(&user).await,
            None => self.forget().await,
        }
    }

    /// Shorthand for `set_current_user(None)`.
    pub async fn clear(&self) {
        self.set_current_user(None).await;
    }

    async fn persist(&self, user: &User) {
        let raw = match serde_json::to_string(user) {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "Failed to encode session");
                return;
            }
        };

        match self.storage.set_item(SESSION_KEY, &raw).await {
            Ok(()) => debug!(user_id = %user.id(), "Session persisted"),
            Err(e) => error!(error = %e, "Failed to persist session"),
        }
    }

    async fn forget(&self) {
        match self.storage.remove_item(SESSION_KEY).await {
            Ok(()) => debug!("Stored session removed"),
            Err(e) => error!(error = %e, "Failed to remove stored session"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;
    use crate::domain::ports::mocks::MockSessionStorage;

    fn guest() -> User {
        User::new("2", "user@example.com", Role::User).with_phone("+375 (29) 123-45-67")
    }

    #[tokio::test]
    async fn test_set_then_get_returns_same_user() {
        let storage = Arc::new(MockSessionStorage::new());
        let store = SessionStore::new(storage.clone());

        store.set_current_user(Some(guest())).await;

        assert_eq!(store.current_user().await, Some(guest()));
        assert!(storage.has_item(SESSION_KEY).await.unwrap());
    }

    #[tokio::test]
    async fn test_clear_removes_user_and_entry() {
        let storage = Arc::new(MockSessionStorage::new());
        let store = SessionStore::new(storage.clone());

        store.set_current_user(Some(guest())).await;
        store.clear().await;

        assert_eq!(store.current_user().await, None);
        assert!(!storage.has_item(SESSION_KEY).await.unwrap());
    }

    #[tokio::test]
    async fn test_load_restores_persisted_user() {
        let raw = serde_json::to_string(&guest()).unwrap();
        let store = SessionStore::new(Arc::new(MockSessionStorage::with_item(SESSION_KEY, &raw)));

        assert!(store.is_loading());
        let restored = store.load().await;

        assert!(!store.is_loading());
        assert_eq!(restored, Some(guest()));
        assert_eq!(store.current_user().await, Some(guest()));
    }

    #[tokio::test]
    async fn test_load_treats_malformed_value_as_no_session() {
        let store = SessionStore::new(Arc::new(MockSessionStorage::with_item(
            SESSION_KEY,
            "{not json",
        )));

        assert_eq!(store.load().await, None);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_load_treats_wrong_shape_as_no_session() {
        let store = SessionStore::new(Arc::new(MockSessionStorage::with_item(
            SESSION_KEY,
            r#"{"name":"nobody"}"#,
        )));

        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn test_storage_failures_are_swallowed() {
        let storage = Arc::new(MockSessionStorage::new());
        storage.set_failing(true);
        let store = SessionStore::new(storage);

        assert_eq!(store.load().await, None);

        store.set_current_user(Some(guest())).await;
        assert_eq!(store.current_user().await, Some(guest()));

        store.clear().await;
        assert_eq!(store.current_user().await, None);
    }
}
