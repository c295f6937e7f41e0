//! Record model representing one contact in the address book.

use crate::domain::{Field, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// A contact: a name plus its phone numbers.
///
/// The name is fixed at construction. Phones keep insertion order and are
/// not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` from [`Phone::new`]; the record is left
    /// unchanged in that case.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Replace every phone equal to `old_phone` with `new_phone`.
    ///
    /// Phones that don't match keep their positions. If nothing matches the
    /// record is unchanged and `new_phone` is not validated.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if at least one phone matches and
    /// `new_phone` is invalid. No phone is replaced in that case.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> Result<(), ValidationError> {
        if !self.phones.iter().any(|p| p.matches(old_phone)) {
            trace!(contact = %self.name, old = old_phone, "No phone to edit");
            return Ok(());
        }

        let replacement = Phone::new(new_phone)?;
        let mut replaced = 0usize;
        for phone in self.phones.iter_mut().filter(|p| p.matches(old_phone)) {
            *phone = replacement.clone();
            replaced += 1;
        }

        debug!(
            contact = %self.name,
            old = old_phone,
            new = %replacement,
            replaced = replaced,
            "Edited phone"
        );
        Ok(())
    }

    /// Remove every phone equal to `phone`. Absent values are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| !p.matches(phone));
        debug!(
            contact = %self.name,
            phone = phone,
            removed = before - self.phones.len(),
            "Removed phone"
        );
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.matches(phone))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone_values(record: &Record) -> Vec<&str> {
        record.phones().iter().map(|p| p.as_str()).collect()
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new("John");
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_add_phone_preserves_order() {
        let mut record = Record::new("John");
        record.add_phone("0937777777").unwrap();
        record.add_phone("5555555555").unwrap();
        record.add_phone("1234567890").unwrap();

        assert_eq!(
            phone_values(&record),
            vec!["0937777777", "5555555555", "1234567890"]
        );
    }

    #[test]
    fn test_add_invalid_phone_leaves_record_untouched() {
        let mut record = Record::new("John");
        record.add_phone("0937777777").unwrap();

        let err = record.add_phone("093777777").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidLength(_)));
        let err = record.add_phone("093777777a").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat(_)));

        assert_eq!(phone_values(&record), vec!["0937777777"]);
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = Record::new("John");
        record.add_phone("0937777777").unwrap();
        record.add_phone("5555555555").unwrap();

        record.edit_phone("0937777777", "0936666666").unwrap();
        assert_eq!(phone_values(&record), vec!["0936666666", "5555555555"]);
    }

    #[test]
    fn test_edit_phone_replaces_all_matches() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(
            phone_values(&record),
            vec!["3333333333", "2222222222", "3333333333"]
        );
    }

    #[test]
    fn test_edit_phone_without_match_is_noop() {
        let mut record = Record::new("John");
        record.add_phone("0937777777").unwrap();

        record.edit_phone("9999999999", "0936666666").unwrap();
        assert_eq!(phone_values(&record), vec!["0937777777"]);

        // Nothing matched, so the replacement is never built
        record.edit_phone("9999999999", "bad").unwrap();
        assert_eq!(phone_values(&record), vec!["0937777777"]);
    }

    #[test]
    fn test_edit_phone_invalid_replacement_fails() {
        let mut record = Record::new("John");
        record.add_phone("0937777777").unwrap();
        record.add_phone("5555555555").unwrap();

        let err = record.edit_phone("0937777777", "093666666x").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat(_)));
        assert_eq!(phone_values(&record), vec!["0937777777", "5555555555"]);
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        record.remove_phone("1111111111");
        assert_eq!(phone_values(&record), vec!["2222222222"]);
    }

    #[test]
    fn test_remove_missing_phone_is_noop() {
        let mut record = Record::new("John");
        record.add_phone("1111111111").unwrap();

        record.remove_phone("2222222222");
        record.remove_phone("not a phone");
        assert_eq!(phone_values(&record), vec!["1111111111"]);
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::new("John");
        record.add_phone("0937777777").unwrap();
        record.add_phone("5555555555").unwrap();

        let found = record.find_phone("5555555555").unwrap();
        assert_eq!(found.as_str(), "5555555555");
        assert!(record.find_phone("0000000000").is_none());
        assert!(record.find_phone("garbage").is_none());
    }

    #[test]
    fn test_name_survives_phone_operations() {
        let mut record = Record::new("John");
        record.add_phone("0937777777").unwrap();
        record.edit_phone("0937777777", "0936666666").unwrap();
        record.remove_phone("0936666666");

        assert_eq!(record.name().to_string(), "John");
    }

    #[test]
    fn test_display() {
        let mut record = Record::new("John");
        assert_eq!(record.to_string(), "Contact name: John, phones: ");

        record.add_phone("0937777777").unwrap();
        assert_eq!(record.to_string(), "Contact name: John, phones: 0937777777");

        record.add_phone("5555555555").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 0937777777; 5555555555"
        );
    }

    #[test]
    fn test_serialization() {
        let mut record = Record::new("Jane");
        record.add_phone("9876543210").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Jane","phones":["9876543210"]}"#);

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserialization_validates_phones() {
        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name":"Jane","phones":["98765"]}"#);
        assert!(result.is_err());

        let record: Record = serde_json::from_str(r#"{"name":"Jane"}"#).unwrap();
        assert!(record.phones().is_empty());
    }
}
