//! Repository implementations for database access
//!
//! Each repository borrows the pool and maps named inputs to positional
//! parameters in a fixed order.

pub mod users;
pub mod reservations;
pub mod properties;

pub use users::UserRepo;
pub use reservations::ReservationRepo;
pub use properties::PropertyRepo;
