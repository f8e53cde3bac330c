//! Contact display formatting
//!
//! Formats the address book for terminal output.

use chrono::NaiveDate;

use crate::book::AddressBook;
use crate::models::{Record, BIRTHDAY_FORMAT};

/// Format every contact as an aligned table, insertion order
pub fn format_contact_list(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts found.".to_string();
    }

    let name_width = book
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<10}  {}\n",
        "Name",
        "Birthday",
        "Phones",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<10}  {:-<20}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for record in book.iter() {
        let birthday = record
            .birthday
            .as_ref()
            .map(|b| b.to_string())
            .unwrap_or_default();

        output.push_str(&format!(
            "{:<name_width$}  {:<10}  {}\n",
            record.name,
            birthday,
            record.phones_joined(),
            name_width = name_width,
        ));
    }

    output
}

/// Format the upcoming-birthdays listing, one contact per line
pub fn format_upcoming(upcoming: &[(&Record, NaiveDate)]) -> String {
    if upcoming.is_empty() {
        return "No upcoming birthdays in the next week.".to_string();
    }

    let mut output = String::from("Upcoming birthdays:");
    for (record, date) in upcoming {
        output.push_str(&format!(
            "\n{}: {}",
            record.name,
            date.format(BIRTHDAY_FORMAT)
        ));
    }
    output
}
