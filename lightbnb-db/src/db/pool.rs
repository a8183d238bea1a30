//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/lightbnb").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS, DEFAULT_ACQUIRE_TIMEOUT).await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
/// * `acquire_timeout` - How long a query waits for a free connection
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await?;

    info!(max_connections, "Connected to database");
    Ok(pool)
}

/// Create a pool from the `[database]` config section.
pub async fn create_pool_from_config(
    database_url: &str,
    config: &DatabaseConfig,
) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, config.max_connections, config.acquire_timeout()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p lightbnb-db -- --ignored

    #[tokio::test]
    async fn unreachable_database_is_an_error() {
        let result = create_pool_with_options(
            "postgres://nobody@127.0.0.1:1/lightbnb",
            1,
            Duration::from_millis(500),
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
