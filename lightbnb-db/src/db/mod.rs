//! Database layer - connection pool and repositories
//!
//! - The pool is built explicitly and passed to each repository by reference
//! - Every query is parameterized; values never appear in SQL text
//! - Execution failures surface as `DbError`, never as row values

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_from_config, create_pool_with_options};
pub use repos::*;

pub use sqlx::PgPool;
