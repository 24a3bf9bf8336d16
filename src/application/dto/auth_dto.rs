//! Authentication DTOs.

use crate::domain::entities::{AuthResponse, SessionToken, User};

/// Screen a successful login or registration should lead to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Administrator dashboard.
    Admin,
    /// Dashboard of an existing guest.
    RegisteredUser,
    /// Post-registration details form.
    NewUser,
}

impl Destination {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Admin => "admin dashboard",
            Self::RegisteredUser => "user dashboard",
            Self::NewUser => "additional info form",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Result of a login or registration.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// Authenticated user.
    pub user: User,
    /// Token issued by the backend.
    pub token: SessionToken,
    /// Where the client goes next.
    pub destination: Destination,
}

impl AuthOutcome {
    /// Builds an outcome for a login: admins go to the admin dashboard.
    #[must_use]
    pub fn after_login(response: AuthResponse) -> Self {
        let destination = if response.user.is_admin() {
            Destination::Admin
        } else {
            Destination::RegisteredUser
        };
        Self::new(response, destination)
    }

    /// Builds an outcome for a registration: non-admins fill in details first.
    #[must_use]
    pub fn after_register(response: AuthResponse) -> Self {
        let destination = if response.user.is_admin() {
            Destination::Admin
        } else {
            Destination::NewUser
        };
        Self::new(response, destination)
    }

    fn new(response: AuthResponse, destination: Destination) -> Self {
        Self {
            user: response.user,
            token: response.token,
            destination,
        }
    }
}
