//! Birthday value object
//!
//! Wraps a calendar date parsed from "DD.MM.YYYY". The stored year is
//! whatever the user typed; the upcoming-birthdays query treats the value
//! as a recurring month/day pattern. Serialized as the "DD.MM.YYYY"
//! string so the on-disk schema stays readable.

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{PhonebookError, PhonebookResult};

/// Date format accepted and rendered by birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a "DD.MM.YYYY" string
    ///
    /// # Errors
    ///
    /// Returns a validation error on wrong format or an impossible
    /// calendar date.
    pub fn parse(raw: &str) -> PhonebookResult<Self> {
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| {
                PhonebookError::Validation("Invalid date format. Use DD.MM.YYYY".into())
            })
    }

    /// The underlying calendar date
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Project this birthday's month/day onto the given year
    ///
    /// Feb 29 in a non-leap year maps to Mar 1, the first day the
    /// recurring date can be observed.
    pub fn occurrence_in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).unwrap())
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl Serialize for Birthday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}
