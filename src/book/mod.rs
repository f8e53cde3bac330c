//! The address book container
//!
//! `AddressBook` owns every contact record, keyed by exact name. It exposes
//! only the sanctioned operations (add/find/delete/iterate and the
//! upcoming-birthdays query) rather than raw map access. Records are kept
//! in insertion order so `all` listings are stable; overwriting a name
//! replaces the record in place.

pub mod upcoming;

use serde::{Deserialize, Serialize};

use crate::models::Record;

/// The full collection of contact records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressBook {
    #[serde(rename = "contacts", default)]
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any record with the same name
    ///
    /// Last write wins; an overwrite keeps the record's position.
    pub fn add_record(&mut self, record: Record) {
        match self.records.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Look up a record by exact name, mutably
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name == name)
    }

    /// Remove a record by name; no-op if absent
    pub fn delete(&mut self, name: &str) {
        self.records.retain(|r| r.name != name);
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
