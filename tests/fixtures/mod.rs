//! Shared records and books for integration tests.

use address_book::{AddressBook, Record};

/// Build a record with the given phones, panicking on invalid input.
pub fn record_with_phones(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record
            .add_phone(*phone)
            .unwrap_or_else(|e| panic!("fixture phone {} rejected: {}", phone, e));
    }
    record
}

/// The two-contact book used by the walkthrough scenario.
pub fn john_and_jane() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(record_with_phones("John", &["0937777777", "5555555555"]));
    book.add_record(record_with_phones("Jane", &["9876543210"]));
    book
}

/// Phone values of a record as plain strings.
#[allow(dead_code)]
pub fn phone_values(record: &Record) -> Vec<String> {
    record.phones().iter().map(|p| p.to_string()).collect()
}
