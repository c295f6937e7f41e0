//! Address Book - an in-memory contact directory.
//!
//! Contacts are stored as records holding a name and any number of
//! validated ten-digit phone numbers, keyed by name in an ordered book.
//!
//! # Architecture
//!
//! - **domain**: Field value objects (`Name`, `Phone`) and their validation errors
//! - **models**: `Record` and `AddressBook`
//! - **error**: Lookup and configuration error types
//! - **config**: Configuration from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut john = Record::new("John");
//! john.add_phone("0937777777").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(john);
//!
//! let john = book.find("John").unwrap();
//! assert_eq!(john.to_string(), "Contact name: John, phones: 0937777777");
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{AddressBookError, ConfigError, NotFoundError};
pub use models::{AddressBook, Record};
