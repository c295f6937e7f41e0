//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number does not have exactly ten characters.
    InvalidLength(String),

    /// The phone number contains something other than decimal digits.
    InvalidFormat(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(phone) => {
                write!(f, "The phone number must contain 10 digits: {}", phone)
            }
            Self::InvalidFormat(phone) => {
                write!(f, "The phone number must contain only numbers: {}", phone)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
