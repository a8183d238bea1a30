//! Result-size limit

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Default number of rows returned by list and search queries
pub const DEFAULT_LIMIT: u32 = 10;

/// Positive row cap for list and search queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Limit(u32);

impl Limit {
    /// Create a limit, rejecting zero.
    pub fn new(n: u32) -> Result<Self, ValidationError> {
        if n == 0 {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                min: 1,
            });
        }
        Ok(Self(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Value as bound to a `LIMIT $n` placeholder.
    pub fn as_i64(self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

impl TryFrom<u32> for Limit {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Limit> for u32 {
    fn from(limit: Limit) -> Self {
        limit.0
    }
}
