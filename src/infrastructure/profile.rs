//! Placeholder profile backend.

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::domain::entities::{AdditionalUserInfo, UserId};
use crate::domain::errors::AuthError;
use crate::domain::ports::ProfilePort;

/// Accepts post-registration details after a delay and drops them.
pub struct DiscardingProfileStore {
    latency: Duration,
}

impl DiscardingProfileStore {
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl ProfilePort for DiscardingProfileStore {
    async fn save_additional_info(
        &self,
        user_id: &UserId,
        _info: &AdditionalUserInfo,
    ) -> Result<(), AuthError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        // TODO: send to the profile endpoint once the backend exposes one.
        info!(%user_id, "Additional info accepted, not persisted");
        Ok(())
    }
}
