//! Successful login or registration payload.

use serde::{Deserialize, Serialize};

use super::{SessionToken, User};

/// User record and token returned by the auth backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Authenticated user, without password.
    pub user: User,
    /// Bearer token for later calls.
    pub token: SessionToken,
}

impl AuthResponse {
    /// Creates new auth response.
    #[must_use]
    pub const fn new(user: User, token: SessionToken) -> Self {
        Self { user, token }
    }
}
