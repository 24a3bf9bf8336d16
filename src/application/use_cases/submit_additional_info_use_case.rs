//! Post-registration details submission.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::services::SessionStore;
use crate::domain::entities::AdditionalUserInfo;
use crate::domain::errors::AuthError;
use crate::domain::ports::ProfilePort;

/// Hands the details of the logged-in user to the profile backend.
pub struct SubmitAdditionalInfoUseCase {
    profile_port: Arc<dyn ProfilePort>,
    session: Arc<SessionStore>,
}

impl SubmitAdditionalInfoUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(profile_port: Arc<dyn ProfilePort>, session: Arc<SessionStore>) -> Self {
        Self {
            profile_port,
            session,
        }
    }

    /// Submits `info` for the current user.
    ///
    /// # Errors
    /// Returns `NotAuthenticated` without a session, or the backend error.
    pub async fn execute(&self, info: AdditionalUserInfo) -> Result<(), AuthError> {
        let user = self
            .session
            .current_user()
            .await
            .ok_or(AuthError::NotAuthenticated)?;

        debug!(user_id = %user.id(), "Submitting additional info");
        self.profile_port
            .save_additional_info(user.id(), &info)
            .await?;

        info!(user_id = %user.id(), "Additional info submitted");
        Ok(())
    }
}
