//! Session token value object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bearer token issued alongside an authenticated user.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken {
    value: String,
}

impl SessionToken {
    /// Creates token without validation.
    #[must_use]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns token as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns masked token for display.
    #[must_use]
    pub fn masked(&self) -> String {
        if self.value.chars().count() <= 10 {
            return "*".repeat(self.value.chars().count());
        }

        let prefix: String = self.value.chars().take(4).collect();
        let suffix: String = self
            .value
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("{prefix}...{suffix}")
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_masking() {
        let token = SessionToken::new_unchecked("mock-jwt-token");

        assert_eq!(token.masked(), "mock...oken");
        assert!(!format!("{token:?}").contains("mock-jwt-token"));
        assert!(!token.to_string().contains("mock-jwt-token"));
    }

    #[test]
    fn test_short_token_fully_masked() {
        let token = SessionToken::new_unchecked("abc");
        assert_eq!(token.masked(), "***");
    }
}
