//! Post-registration guest details.

use serde::{Deserialize, Serialize};

/// Identity details collected after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalUserInfo {
    /// Passport number, e.g. `MP4000000`.
    pub passport_number: String,
    /// Birth date as entered, `DD.MM.YYYY`.
    pub birth_date: String,
    /// Contact phone, e.g. `+375291234567`.
    pub phone_number: String,
}

impl AdditionalUserInfo {
    #[must_use]
    pub fn new(
        passport_number: impl Into<String>,
        birth_date: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            passport_number: passport_number.into().trim().to_uppercase(),
            birth_date: birth_date.into().trim().to_string(),
            phone_number: phone_number.into().trim().to_string(),
        }
    }
}
