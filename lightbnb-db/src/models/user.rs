//! User rows

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Email;

/// User record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Fields for a new user, bound as `$1 = name, $2 = email, $3 = password`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
    /// Stored as given; hashing belongs to the caller
    pub password: String,
}
