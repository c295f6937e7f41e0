//! Domain value objects and types.
//!
//! This module contains the field types a record is built from. Value
//! objects validate at construction time so invalid data can never be
//! represented in the system.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::{Phone, PHONE_LENGTH};
