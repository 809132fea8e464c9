//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Validation, password hashing and the clock abstraction live here so the
//! service layer can stay a thin orchestration of store calls.

pub mod clock;
pub mod constants;
pub mod error;
pub mod organization;
pub mod password;
pub mod school;
pub mod user;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use organization::Organization;
pub use password::Password;
pub use school::School;
pub use user::{CreateUser, NewUser, UpdateEmail, UpdatePassword, UpdateUser, User, UserResponse};
pub use validation::validate_user;
