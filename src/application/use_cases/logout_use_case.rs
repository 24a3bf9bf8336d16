//! Logout use case implementation.

use std::sync::Arc;

use tracing::info;

use crate::application::services::SessionStore;
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Ends the backend session and forgets the local one.
#[derive(Clone)]
pub struct LogoutUseCase {
    auth_port: Arc<dyn AuthPort>,
    session: Arc<SessionStore>,
}

impl LogoutUseCase {
    /// Creates new logout use case.
    #[must_use]
    pub const fn new(auth_port: Arc<dyn AuthPort>, session: Arc<SessionStore>) -> Self {
        Self { auth_port, session }
    }

    /// Executes logout.
    ///
    /// # Errors
    /// Propagates backend errors; the local session is left intact then.
    pub async fn execute(&self) -> Result<(), AuthError> {
        self.auth_port.logout().await?;
        self.session.clear().await;
        info!("Logged out");
        Ok(())
    }
}
