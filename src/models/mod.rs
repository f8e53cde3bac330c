//! Core data models for the phonebook
//!
//! This module contains the data structures that represent the contact
//! domain: phone numbers, birthdays, and contact records.

pub mod birthday;
pub mod phone;
pub mod record;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use phone::PhoneNumber;
pub use record::Record;
