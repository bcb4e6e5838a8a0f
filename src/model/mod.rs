//! Pure data structures implementing the [`Entity`](crate::framework::Entity) trait.

pub mod employee;
pub mod person;
pub mod user;

pub use employee::*;
pub use person::*;
pub use user::*;
