//! Storage layer for the phonebook
//!
//! The whole address book persists as one JSON document,
//! `data/addressbook.json`, written atomically on graceful shutdown and
//! read back at startup. Schema:
//!
//! ```json
//! { "contacts": [ { "name": "Alice",
//!                   "phones": ["0123456789"],
//!                   "birthday": "01.01.1990" } ] }
//! ```

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use crate::book::AddressBook;
use crate::config::paths::PhonebookPaths;
use crate::error::PhonebookError;

/// Owns the persistence of the address book
pub struct Storage {
    paths: PhonebookPaths,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: PhonebookPaths) -> Result<Self, PhonebookError> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &PhonebookPaths {
        &self.paths
    }

    /// Load the address book from disk; an absent file yields an empty book
    pub fn load_book(&self) -> Result<AddressBook, PhonebookError> {
        read_json(self.paths.book_file())
    }

    /// Save the address book to disk atomically
    pub fn save_book(&self, book: &AddressBook) -> Result<(), PhonebookError> {
        write_json_atomic(self.paths.book_file(), book)
    }
}
