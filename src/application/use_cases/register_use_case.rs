//! Registration use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::AuthOutcome;
use crate::application::services::SessionStore;
use crate::domain::entities::RegisterCredentials;
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Handles new-account registration.
#[derive(Clone)]
pub struct RegisterUseCase {
    auth_port: Arc<dyn AuthPort>,
    session: Arc<SessionStore>,
}

impl RegisterUseCase {
    /// Creates new register use case.
    #[must_use]
    pub const fn new(auth_port: Arc<dyn AuthPort>, session: Arc<SessionStore>) -> Self {
        Self { auth_port, session }
    }

    /// Registers the account and stores it as the current session.
    ///
    /// # Errors
    /// Returns `PasswordMismatch` if the confirmation differs, or
    /// `UserAlreadyExists` if the email is taken.
    pub async fn execute(
        &self,
        credentials: RegisterCredentials,
    ) -> Result<AuthOutcome, AuthError> {
        debug!(email = %credentials.email, "Attempting registration");

        if !credentials.passwords_match() {
            warn!("Password confirmation does not match");
            return Err(AuthError::PasswordMismatch);
        }

        let response = self.auth_port.register(&credentials).await.map_err(|e| {
            warn!(error = %e, "Registration failed");
            e
        })?;

        info!(user_id = %response.user.id(), "Account registered");

        self.session
            .set_current_user(Some(response.user.clone()))
            .await;

        Ok(AuthOutcome::after_register(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::Destination;
    use crate::domain::ports::mocks::{MockAuthPort, MockSessionStorage};

    fn session() -> Arc<SessionStore> {
        Arc::new(SessionStore::new(Arc::new(MockSessionStorage::new())))
    }

    #[tokio::test]
    async fn test_new_user_goes_to_additional_info() {
        let session = session();
        let use_case = RegisterUseCase::new(Arc::new(MockAuthPort::new(true)), session.clone());

        let outcome = use_case
            .execute(RegisterCredentials::new("new@example.com", "Secret1").with_confirmation("Secret1"))
            .await
            .unwrap();

        assert_eq!(outcome.destination, Destination::NewUser);
        assert!(session.current_user().await.is_some());
    }

    #[tokio::test]
    async fn test_mismatched_confirmation_never_reaches_backend() {
        let auth = Arc::new(MockAuthPort::new(false));
        let use_case = RegisterUseCase::new(auth, session());

        let result = use_case
            .execute(RegisterCredentials::new("new@example.com", "Secret1").with_confirmation("Secret2"))
            .await;

        assert!(matches!(result, Err(AuthError::PasswordMismatch)));
    }

    #[tokio::test]
    async fn test_existing_email_is_reported() {
        let session = session();
        let use_case = RegisterUseCase::new(Arc::new(MockAuthPort::new(false)), session.clone());

        let result = use_case
            .execute(RegisterCredentials::new("user@example.com", "User123"))
            .await;

        assert!(matches!(result, Err(AuthError::UserAlreadyExists { .. })));
        assert_eq!(session.current_user().await, None);
    }
}
