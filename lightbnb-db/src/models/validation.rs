//! Input checks that run before any SQL is built

use std::fmt;

/// Rejected user or guest input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Blank after trimming
    Empty { field: &'static str },

    /// Longer than the column allows
    TooLong { field: &'static str, max: usize },

    /// Wrong shape, with a hint for the caller
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Below the smallest accepted value
    OutOfRange { field: &'static str, min: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} is required", field),
            Self::TooLong { field, max } => {
                write!(f, "{} is longer than {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "invalid {}: {}", field, reason),
            Self::OutOfRange { field, min } => write!(f, "{} must be at least {}", field, min),
        }
    }
}

impl std::error::Error for ValidationError {}
