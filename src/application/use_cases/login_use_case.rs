//! Login use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::AuthOutcome;
use crate::application::services::SessionStore;
use crate::domain::entities::LoginCredentials;
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Handles the existing-account login workflow.
#[derive(Clone)]
pub struct LoginUseCase {
    auth_port: Arc<dyn AuthPort>,
    session: Arc<SessionStore>,
}

impl LoginUseCase {
    /// Creates new login use case.
    #[must_use]
    pub const fn new(auth_port: Arc<dyn AuthPort>, session: Arc<SessionStore>) -> Self {
        Self { auth_port, session }
    }

    /// Executes login and stores the user as the current session.
    ///
    /// # Errors
    /// Returns `InvalidCredentials` if email or password do not match.
    pub async fn execute(&self, credentials: LoginCredentials) -> Result<AuthOutcome, AuthError> {
        debug!(email = %credentials.email, "Attempting login");

        let response = self.auth_port.login(&credentials).await.map_err(|e| {
            warn!(error = %e, "Login failed");
            e
        })?;

        info!(
            user_id = %response.user.id(),
            role = %response.user.role(),
            "Successfully authenticated"
        );

        self.session
            .set_current_user(Some(response.user.clone()))
            .await;

        Ok(AuthOutcome::after_login(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::Destination;
    use crate::domain::entities::{Role, User};
    use crate::domain::ports::mocks::{MockAuthPort, MockSessionStorage};

    fn session() -> Arc<SessionStore> {
        Arc::new(SessionStore::new(Arc::new(MockSessionStorage::new())))
    }

    #[tokio::test]
    async fn test_successful_login_sets_session() {
        let session = session();
        let use_case = LoginUseCase::new(Arc::new(MockAuthPort::new(true)), session.clone());

        let outcome = use_case
            .execute(LoginCredentials::new("guest@example.com", "Guest123"))
            .await
            .unwrap();

        assert_eq!(outcome.destination, Destination::RegisteredUser);
        assert_eq!(session.current_user().await, Some(outcome.user));
    }

    #[tokio::test]
    async fn test_admin_login_goes_to_admin_dashboard() {
        let admin = User::new("1", "admin@example.com", Role::Admin);
        let use_case = LoginUseCase::new(Arc::new(MockAuthPort::with_user(true, admin)), session());

        let outcome = use_case
            .execute(LoginCredentials::new("admin@example.com", "Admin123"))
            .await
            .unwrap();

        assert_eq!(outcome.destination, Destination::Admin);
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_session_empty() {
        let session = session();
        let use_case = LoginUseCase::new(Arc::new(MockAuthPort::new(false)), session.clone());

        let result = use_case
            .execute(LoginCredentials::new("guest@example.com", "wrong"))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert_eq!(session.current_user().await, None);
    }
}
