//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised when a lookup in the address book misses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// No record is stored under the requested name
    #[error("Record with name '{0}' not found.")]
    RecordNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Any failure surfaced by the record and book operations.
///
/// Lets a caller chain phone edits and book lookups with `?` in one function.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// A phone number failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record lookup missed
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Convenience type alias for Results with NotFoundError
pub type BookResult<T> = Result<T, NotFoundError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
