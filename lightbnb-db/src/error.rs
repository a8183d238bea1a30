//! Error types for lightbnb-db

use std::path::PathBuf;

use thiserror::Error;

/// Failure surfaced by the database when running a query.
///
/// Connectivity problems, SQL syntax errors, constraint violations and type
/// mismatches all arrive here. Missing rows are not errors: lookups return
/// `Ok(None)`.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("query execution failed: {0}")]
    Execution(#[from] sqlx::Error),
}

impl DbError {
    /// Postgres SQLSTATE code, when the failure came from the server.
    pub fn sql_state(&self) -> Option<String> {
        match self {
            DbError::Execution(sqlx::Error::Database(db)) => db.code().map(|c| c.into_owned()),
            DbError::Execution(_) => None,
        }
    }

    /// True when the server rejected a write on a unique constraint.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            DbError::Execution(sqlx::Error::Database(db)) => db.is_unique_violation(),
            DbError::Execution(_) => false,
        }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid configuration: {reason}")]
    Invalid { reason: String },
}

impl ConfigError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_error_display() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("query execution failed"));
        assert_eq!(err.sql_state(), None);
        assert!(!err.is_unique_violation());
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::invalid("max_connections must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: max_connections must be at least 1"
        );
    }
}
