//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

use crate::constants::*;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{}", MSG_PASSWORD_REQUIRED)]
    PasswordRequired,

    #[error("{}", MSG_FIRST_NAME_REQUIRED)]
    FirstNameRequired,

    #[error("{}", MSG_LAST_NAME_REQUIRED)]
    LastNameRequired,

    #[error("{}", MSG_EMAIL_REQUIRED)]
    EmailRequired,

    #[error("{}", MSG_INVALID_EMAIL)]
    InvalidEmailFormat,

    /// Hashing backend failure; never shown to callers as-is
    #[error("Password hash failed: {0}")]
    PasswordHash(String),
}

impl DomainError {
    /// Create a password hashing error
    pub fn password_hash(msg: impl Into<String>) -> Self {
        DomainError::PasswordHash(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
