//! lightbnb-db: data access for the LightBnB rental listings app
//!
//! Builds parameterized SQL against PostgreSQL for user lookup and creation,
//! reservation listing, filtered property search, and property creation.
//!
//! The pool is never global. Callers build one with [`db::create_pool`] and
//! hand it to a repository:
//!
//! ```ignore
//! let pool = lightbnb_db::db::create_pool("postgres://localhost/lightbnb").await?;
//! let users = lightbnb_db::UserRepo::new(&pool);
//! let user = users.get_by_email(&Email::new("tristanjacobs@gmail.com")?).await?;
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod query;

pub use db::{PropertyRepo, ReservationRepo, UserRepo};
pub use error::{ConfigError, DbError};
pub use models::{
    Email, Limit, NewProperty, NewUser, Property, PropertyListing, Reservation, SearchCriteria,
    User, ValidationError,
};
pub use query::{QueryPlan, SqlParam};
