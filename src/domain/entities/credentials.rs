//! Login and registration credentials.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Plaintext password, wiped from memory on drop and never printed.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Exposes the secret for comparison against a stored record.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Credentials submitted by the login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: Password,
}

impl LoginCredentials {
    /// Creates login credentials. The email is kept exactly as typed.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<Password>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Credentials submitted by the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCredentials {
    /// Account email.
    pub email: String,
    /// Chosen password.
    pub password: Password,
    /// Repeated password, when the form collected one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<Password>,
}

impl RegisterCredentials {
    /// Creates registration credentials without a confirmation field.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<Password>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: None,
        }
    }

    /// Attaches the repeated password.
    #[must_use]
    pub fn with_confirmation(mut self, confirm_password: impl Into<Password>) -> Self {
        self.confirm_password = Some(confirm_password.into());
        self
    }

    /// Returns false only when a confirmation was given and differs.
    #[must_use]
    pub fn passwords_match(&self) -> bool {
        self.confirm_password
            .as_ref()
            .is_none_or(|confirm| confirm == &self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_debug_is_masked() {
        let creds = LoginCredentials::new("user@example.com", "User123");
        let debug = format!("{creds:?}");

        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("User123"));
    }

    #[test]
    fn test_email_is_kept_as_typed() {
        let creds = LoginCredentials::new(" user@example.com", "User123");
        assert_eq!(creds.email, " user@example.com");

        let creds = RegisterCredentials::new("User@Example.com ", "Secret1");
        assert_eq!(creds.email, "User@Example.com ");
    }

    #[test]
    fn test_passwords_match() {
        let plain = RegisterCredentials::new("a@b.c", "Secret1");
        assert!(plain.passwords_match());

        let same = RegisterCredentials::new("a@b.c", "Secret1").with_confirmation("Secret1");
        assert!(same.passwords_match());

        let different = RegisterCredentials::new("a@b.c", "Secret1").with_confirmation("Secret2");
        assert!(!different.passwords_match());
    }

    #[test]
    fn test_register_credentials_wire_shape() {
        let creds: RegisterCredentials = serde_json::from_str(
            r#"{"email":"a@b.c","password":"Secret1","confirmPassword":"Secret1"}"#,
        )
        .unwrap();

        assert_eq!(creds.password.expose(), "Secret1");
        assert!(creds.passwords_match());
    }
}
