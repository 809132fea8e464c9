//! Domain-level constants.
//!
//! Caller-visible messages and validation patterns. The message strings are
//! part of the public contract and must not change.

// =============================================================================
// Validation messages
// =============================================================================

pub const MSG_PASSWORD_REQUIRED: &str = "password is required";

pub const MSG_FIRST_NAME_REQUIRED: &str = "first name is required";

pub const MSG_LAST_NAME_REQUIRED: &str = "last name is required";

pub const MSG_EMAIL_REQUIRED: &str = "email is required";

pub const MSG_INVALID_EMAIL: &str = "invalid email format";

// =============================================================================
// Service messages
// =============================================================================

/// Returned when another user already holds the requested email
pub const MSG_EMAIL_TAKEN: &str = "user with this email already exists";

/// Returned when the store has no matching record
pub const MSG_USER_NOT_FOUND: &str = "user not found";

/// Replaces every store and hashing failure before it reaches a caller
pub const MSG_INTERNAL: &str = "an internal error occurred";

// =============================================================================
// Patterns
// =============================================================================

/// `local-part@domain.tld`, TLD letters only and at least two long
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
