//! Candidate user validation.
//!
//! Checks run in a fixed order and the first failure wins.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::EMAIL_PATTERN;
use crate::error::{DomainError, DomainResult};
use crate::user::CreateUser;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Validate a candidate user before it is hashed and stored.
///
/// Order: password, first name, last name, email presence, email format.
pub fn validate_user(user: &CreateUser) -> DomainResult<()> {
    if user.password.is_empty() {
        return Err(DomainError::PasswordRequired);
    }

    if user.first_name.is_empty() {
        return Err(DomainError::FirstNameRequired);
    }

    if user.last_name.is_empty() {
        return Err(DomainError::LastNameRequired);
    }

    validate_email(&user.email)
}

/// Presence and format check for a single email address.
fn validate_email(email: &str) -> DomainResult<()> {
    if email.is_empty() {
        return Err(DomainError::EmailRequired);
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(DomainError::InvalidEmailFormat);
    }

    Ok(())
}
