//! Shared behaviour of record fields.

use std::fmt::Display;

/// A single string-valued attribute of a record.
///
/// Implemented by every concrete field type so that record operations can
/// compare stored values against raw input without caring which kind of
/// field they hold.
pub trait Field: Display {
    /// The raw stored value.
    fn value(&self) -> &str;

    /// Whether the stored value equals `raw` exactly.
    fn matches(&self, raw: &str) -> bool {
        self.value() == raw
    }
}
