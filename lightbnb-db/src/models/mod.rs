//! Plain data passed to and from the repositories
//!
//! Input types validate at construction. Row types are decoded straight from
//! query results with `sqlx::FromRow`.

pub mod validation;
pub mod email;
pub mod limit;
pub mod criteria;
pub mod user;
pub mod property;
pub mod reservation;

pub use validation::ValidationError;
pub use email::Email;
pub use limit::Limit;
pub use criteria::SearchCriteria;
pub use user::{NewUser, User};
pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::Reservation;
