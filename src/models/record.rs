//! Contact record model
//!
//! One contact: a name, an insertion-ordered list of unique phone numbers,
//! and an optional birthday.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PhonebookError, PhonebookResult};
use crate::models::{Birthday, PhoneNumber};

/// A single contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Contact name, the lookup key in the address book
    pub name: String,

    /// Phone numbers in the order they were added, no duplicates
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,

    /// Birthday, if the user has set one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Validate and add a phone number
    ///
    /// # Errors
    ///
    /// Fails if `raw` is malformed or the number is already on this record.
    pub fn add_phone(&mut self, raw: &str) -> PhonebookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        if self.phones.contains(&phone) {
            return Err(PhonebookError::duplicate_phone(raw));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Remove a phone number if present
    ///
    /// Removing a number that is not on the record is not an error, but
    /// `raw` must still be a well-formed phone number.
    pub fn remove_phone(&mut self, raw: &str) -> PhonebookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        if let Some(pos) = self.phones.iter().position(|p| *p == phone) {
            self.phones.remove(pos);
        }
        Ok(())
    }

    /// Replace `old` with `new`
    ///
    /// # Errors
    ///
    /// Fails if `old` is not currently on the record (checked before `new`
    /// is validated). A failure adding `new` propagates; the old number is
    /// removed first, as the replace is not transactional.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> PhonebookResult<()> {
        if self.find_phone(old).is_none() {
            return Err(PhonebookError::phone_not_found(old));
        }
        self.remove_phone(old)?;
        self.add_phone(new)
    }

    /// Set or replace the birthday
    pub fn add_birthday(&mut self, raw: &str) -> PhonebookResult<()> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Find a phone by exact digit string, no normalization
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Join the phone numbers with "; " for display
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_joined()
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
