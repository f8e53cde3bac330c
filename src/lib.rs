//! Phonebook - a terminal contact book with birthday reminders
//!
//! Stores names, phone numbers, and birthdays, persists them as JSON, and
//! answers an upcoming-birthdays query that rolls each birthday into the
//! right year and shifts weekend occurrences onto the next Monday.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (phone numbers, birthdays, records)
//! - `book`: The address book container and the birthday query
//! - `storage`: JSON file storage layer
//! - `display`: Terminal formatting
//! - `view`: Output seam between handlers and the terminal
//! - `cli`: The interactive command loop

pub mod book;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;
pub mod view;

pub use book::AddressBook;
pub use error::{PhonebookError, PhonebookResult};
