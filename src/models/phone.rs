//! Phone number value object
//!
//! A phone number is exactly 10 ASCII decimal digits, validated at
//! construction. Equality and hashing go by the digit string.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PhonebookError, PhonebookResult};

/// A validated 10-digit phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a phone number from a raw string
    ///
    /// # Errors
    ///
    /// Returns a validation error unless the input is exactly 10 decimal digits.
    pub fn new(raw: &str) -> PhonebookResult<Self> {
        if raw.len() != 10 || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhonebookError::Validation(
                "Phone number must contain exactly 10 digits.".into(),
            ));
        }
        Ok(Self(raw.to_string()))
    }

    /// Get the digit string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
