//! Authentication error types.

use thiserror::Error;

/// Authentication error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("a user with email {email} already exists")]
    UserAlreadyExists { email: String },

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("not logged in")]
    NotAuthenticated,
}

impl AuthError {
    /// Creates user-exists error.
    #[must_use]
    pub fn user_exists(email: impl Into<String>) -> Self {
        Self::UserAlreadyExists {
            email: email.into(),
        }
    }

    /// Returns whether the error belongs inline next to the form fields.
    #[must_use]
    pub const fn is_form_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::UserAlreadyExists { .. } | Self::PasswordMismatch
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_errors() {
        assert!(AuthError::InvalidCredentials.is_form_error());
        assert!(AuthError::user_exists("a@b.c").is_form_error());
        assert!(!AuthError::NotAuthenticated.is_form_error());
    }

    #[test]
    fn test_user_exists_message_names_email() {
        let err = AuthError::user_exists("user@example.com");
        assert_eq!(
            err.to_string(),
            "a user with email user@example.com already exists"
        );
    }
}
