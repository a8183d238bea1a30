//! User repository
//!
//! Lookup by email or id, and creation with `RETURNING *`.

use sqlx::PgPool;
use tracing::debug;

use crate::error::DbError;
use crate::models::{Email, NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a single user by email, or `None` when no user has it.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, DbError> {
        debug!(email = %email.as_str(), "looking up user by email");

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE users.email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Get a single user by id, or `None` when absent.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, DbError> {
        debug!(id, "looking up user by id");

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE users.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Insert a user and return the stored row.
    ///
    /// A duplicate email surfaces as a unique-violation execution failure
    /// when the schema enforces one.
    pub async fn create(&self, user: &NewUser) -> Result<User, DbError> {
        debug!(email = %user.email.as_str(), "creating user");

        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&user.name)
        .bind(user.email.as_str())
        .bind(&user.password)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }
}
