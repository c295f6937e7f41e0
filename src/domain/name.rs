//! Name value object.

use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The identifying name of a contact.
///
/// Any string is accepted, including the empty string. Uniqueness is not
/// enforced here; the address book keys its entries by this value.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("John");
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Name {
    fn value(&self) -> &str {
        &self.0
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_anything() {
        assert_eq!(Name::new("John").as_str(), "John");
        assert_eq!(Name::new("").as_str(), "");
        assert_eq!(Name::new("Жанна 42").value(), "Жанна 42");
    }

    #[test]
    fn test_name_display() {
        assert_eq!(format!("{}", Name::new("Jane")), "Jane");
    }

    #[test]
    fn test_name_serialization() {
        let json = serde_json::to_string(&Name::new("John")).unwrap();
        assert_eq!(json, "\"John\"");

        let name: Name = serde_json::from_str("\"Jane\"").unwrap();
        assert_eq!(name, Name::new("Jane"));
    }
}
