//! Email address validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Maximum length for email addresses (matches `users.email VARCHAR(255)`)
const MAX_EMAIL_LEN: usize = 255;

/// Loose shape check: something@something.something, no whitespace
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex")
});

/// Validated email address
///
/// Serializes as a bare string. Deserializing runs the same validation as
/// [`Email::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new email address.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 255 characters
    /// - `local@domain.tld` shape
    ///
    /// Case is preserved; comparison is left to the database.
    ///
    /// # Example
    /// ```
    /// use lightbnb_db::models::Email;
    ///
    /// assert!(Email::new("tristanjacobs@gmail.com").is_ok());
    /// assert!(Email::new("").is_err());
    /// assert!(Email::new("no-at-sign").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }

        if trimmed.len() > MAX_EMAIL_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }

        if !EMAIL_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like name@example.com",
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl std::str::FromStr for Email {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
