//! Guest profile port definition.

use async_trait::async_trait;

use crate::domain::entities::{AdditionalUserInfo, UserId};
use crate::domain::errors::AuthError;

/// Port for the backend that receives post-registration details.
#[async_trait]
pub trait ProfilePort: Send + Sync {
    /// Submits the details for `user_id`.
    async fn save_additional_info(
        &self,
        user_id: &UserId,
        info: &AdditionalUserInfo,
    ) -> Result<(), AuthError>;
}
