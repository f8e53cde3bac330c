//! Upcoming-birthday query
//!
//! Reinterprets each stored birthday as a recurring month/day pattern
//! against a calendar-date "today": project onto today's year, roll
//! forward a year if the occurrence is already past, shift weekend
//! occurrences onto the following Monday, and keep what falls inside the
//! horizon. Both sides of every comparison are plain `NaiveDate`s; no
//! time-of-day is involved.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::AddressBook;
use crate::models::Record;

/// Move a Saturday or Sunday occurrence to the following Monday
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}

/// Compute the next observed occurrence of a birthday on or after `today`
///
/// Returns the weekend-adjusted date. The year roll happens before the
/// weekend shift, so a Jan 1 birthday queried on Dec 30 lands in the next
/// year and is then shifted if that Jan 1 is a weekend.
fn next_occurrence(record: &Record, today: NaiveDate) -> Option<NaiveDate> {
    let birthday = record.birthday.as_ref()?;

    let mut occurrence = birthday.occurrence_in_year(today.year());
    if occurrence < today {
        occurrence = birthday.occurrence_in_year(today.year() + 1);
    }
    Some(adjust_for_weekend(occurrence))
}

impl AddressBook {
    /// Records whose birthdays fall within `horizon_days` of `today`
    ///
    /// Inclusive on both ends: an adjusted occurrence landing exactly on
    /// `today` or on `today + horizon_days` is returned. Pairs follow the
    /// book's insertion order, not date order.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        horizon_days: u32,
    ) -> Vec<(&Record, NaiveDate)> {
        let end = today + Days::new(u64::from(horizon_days));

        self.iter()
            .filter_map(|record| {
                let occurrence = next_occurrence(record, today)?;
                (today <= occurrence && occurrence <= end).then_some((record, occurrence))
            })
            .collect()
    }
}
