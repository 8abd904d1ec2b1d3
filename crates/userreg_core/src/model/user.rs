//! User record and registration input.
//!
//! # Responsibility
//! - Define the stored user shape and the input accepted by registration.
//! - Validate registration input before it reaches SQL.
//!
//! # Invariants
//! - `username` is non-empty and stored exactly as given, whitespace included.
//! - `password` is stored and compared verbatim; it is never serialized outward.

use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// `(username, email)` pairs in insertion order.
pub type UserListing = Vec<(String, String)>;

/// One persisted user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
    pub email: String,
    /// Plain text, exactly as registered.
    #[serde(skip_serializing)]
    pub password: String,
    /// Unix epoch milliseconds assigned by storage on insert.
    pub created_at: Option<i64>,
}

/// Registration input triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks registration constraints.
    ///
    /// # Errors
    /// - `EmptyUsername` when the username is the empty string.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        validate_username(&self.username)
    }
}

impl User {
    /// Returns whether `candidate` matches the stored password byte for byte.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Model-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyUsername,
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
        }
    }
}

impl Error for UserValidationError {}

pub(crate) fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }
    Ok(())
}
