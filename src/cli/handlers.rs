//! Per-command handlers
//!
//! Each handler mutates the address book through its validated operations
//! and reports through the view. Validation failures come back as errors
//! for the loop to surface; unknown-contact lookups are reported as plain
//! messages, not errors.

use chrono::NaiveDate;

use crate::book::AddressBook;
use crate::error::PhonebookResult;
use crate::models::Record;
use crate::view::View;

/// `add <name> <phone>`: create the contact if needed, then add the phone
pub fn add_contact(
    book: &mut AddressBook,
    view: &dyn View,
    name: &str,
    phone: &str,
) -> PhonebookResult<()> {
    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            view.show_message("Contact updated.");
        }
        None => {
            let mut record = Record::new(name);
            record.add_phone(phone)?;
            book.add_record(record);
            view.show_message("Contact added.");
        }
    }
    Ok(())
}

/// `change <name> <old> <new>`: replace a phone on an existing contact
pub fn change_number(
    book: &mut AddressBook,
    view: &dyn View,
    name: &str,
    old: &str,
    new: &str,
) -> PhonebookResult<()> {
    match book.find_mut(name) {
        Some(record) => {
            record.edit_phone(old, new)?;
            view.show_message("Contact has been updated.");
        }
        None => view.show_message("No matches found. Contact not updated."),
    }
    Ok(())
}

/// `phone <name>`: list a contact's phone numbers
pub fn show_phone(book: &AddressBook, view: &dyn View, name: &str) {
    match book.find(name) {
        Some(record) => view.show_message(&format!(
            "{}'s phone number is: {}",
            name,
            record.phones_joined()
        )),
        None => view.show_message("Contact not found."),
    }
}

/// `add-birthday <name> <date>`: set or replace a contact's birthday
pub fn add_birthday(
    book: &mut AddressBook,
    view: &dyn View,
    name: &str,
    date: &str,
) -> PhonebookResult<()> {
    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(date)?;
            view.show_message(&format!("Birthday for {} added as {}.", name, date));
        }
        None => view.show_message("Contact not found."),
    }
    Ok(())
}

/// `show-birthday <name>`: show a contact's birthday
pub fn show_birthday(book: &AddressBook, view: &dyn View, name: &str) {
    match book.find(name) {
        Some(record) => match &record.birthday {
            Some(birthday) => {
                view.show_message(&format!("{}'s birthday is on {}.", name, birthday));
            }
            None => view.show_message(&format!("{} does not have a birthday set.", name)),
        },
        None => view.show_message("Contact not found."),
    }
}

/// `birthdays`: contacts with birthdays within the horizon
pub fn birthdays(book: &AddressBook, view: &dyn View, today: NaiveDate, horizon_days: u32) {
    let upcoming = book.upcoming_birthdays(today, horizon_days);
    view.show_message(&crate::display::format_upcoming(&upcoming));
}
