//! The address book: an ordered directory of records keyed by contact name.

use super::record::Record;
use crate::domain::Field;
use crate::error::{BookResult, NotFoundError};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// Directory mapping contact names to records.
///
/// Every entry is keyed by its record's name, so the map can only be
/// changed through [`add_record`](Self::add_record) and
/// [`delete`](Self::delete). Iteration follows insertion order; overwriting
/// a name keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    entries: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().value().to_string();
        let phones = record.phones().len();
        let replaced = self.entries.insert(key.clone(), record).is_some();

        debug!(
            contact = %key,
            phones = phones,
            replaced = replaced,
            "Added record"
        );
    }

    /// Look up a record by name.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError::RecordNotFound` if no record has that name.
    pub fn find(&self, name: &str) -> BookResult<&Record> {
        self.entries
            .get(name)
            .ok_or_else(|| NotFoundError::RecordNotFound(name.to_string()))
    }

    /// Look up a record by name for modification.
    ///
    /// Changes made through the returned reference are stored in the book.
    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| NotFoundError::RecordNotFound(name.to_string()))
    }

    /// Remove the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError::RecordNotFound` if no record has that name;
    /// the book is unchanged.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        match self.entries.shift_remove(name) {
            Some(_) => {
                debug!(contact = %name, "Deleted record");
                Ok(())
            }
            None => Err(NotFoundError::RecordNotFound(name.to_string())),
        }
    }

    /// Whether a record with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.entries.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.values()
    }
}

// Order-sensitive, unlike IndexMap's own equality
impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for AddressBook {}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

// Serde support - serialize as a list of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.entries.values())
    }
}

// Serde support - rebuild through add_record so keys always match names
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        Ok(records.into_iter().collect())
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.entries.values() {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
