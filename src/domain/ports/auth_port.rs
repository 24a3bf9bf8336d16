//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{AuthResponse, LoginCredentials, RegisterCredentials};
use crate::domain::errors::AuthError;

/// Port for account authentication operations.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Checks credentials and returns the matching user.
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, AuthError>;

    /// Creates a new account with role `user`.
    async fn register(&self, credentials: &RegisterCredentials)
    -> Result<AuthResponse, AuthError>;

    /// Ends the server-side session.
    async fn logout(&self) -> Result<(), AuthError>;
}
