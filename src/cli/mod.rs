//! The interactive command loop
//!
//! Bridges line-based command parsing with the address book operations.
//! Every command runs synchronously to completion; command failures are
//! turned into one-line messages and never terminate the loop. The book
//! persists on `close`/`exit` and on end-of-input.

pub mod commands;
pub mod handlers;

pub use commands::{Command, ParseError};

use std::io::{self, BufRead, Write};

use chrono::Local;

use crate::book::AddressBook;
use crate::config::Settings;
use crate::error::PhonebookResult;
use crate::storage::Storage;
use crate::view::View;

/// Run the read-evaluate-print loop until the user quits or input ends
pub fn run_repl(
    book: &mut AddressBook,
    storage: &Storage,
    settings: &Settings,
    view: &dyn View,
    input: &mut dyn BufRead,
) -> PhonebookResult<()> {
    view.show_message("Welcome to the assistant bot!");

    let mut line = String::new();
    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        line.clear();
        // End-of-input counts as a graceful quit
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                view.show_message(&e.to_string());
                continue;
            }
        };

        if command == Command::Exit {
            break;
        }

        if let Err(e) = execute(command, book, view, settings) {
            view.show_message(&e.to_string());
        }
    }

    storage.save_book(book)?;
    view.show_message("Good bye");
    Ok(())
}

/// Execute one non-exit command against the book
fn execute(
    command: Command,
    book: &mut AddressBook,
    view: &dyn View,
    settings: &Settings,
) -> PhonebookResult<()> {
    match command {
        Command::Hello => view.show_message("How can I help you?"),
        Command::Add { name, phone } => handlers::add_contact(book, view, &name, &phone)?,
        Command::Change { name, old, new } => {
            handlers::change_number(book, view, &name, &old, &new)?;
        }
        Command::Phone { name } => handlers::show_phone(book, view, &name),
        Command::AddBirthday { name, date } => {
            handlers::add_birthday(book, view, &name, &date)?;
        }
        Command::ShowBirthday { name } => handlers::show_birthday(book, view, &name),
        Command::Birthdays => {
            let today = Local::now().date_naive();
            handlers::birthdays(book, view, today, settings.upcoming_horizon_days);
        }
        Command::All => view.show_all_contacts(book),
        Command::Commands => view.show_commands(),
        // Exit never reaches execute
        Command::Exit => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PhonebookPaths;
    use crate::view::RecordingView;
    use tempfile::TempDir;

    fn run_script(script: &str) -> (RecordingView, AddressBook, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PhonebookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let settings = Settings::default();
        let view = RecordingView::new();
        let mut book = AddressBook::new();

        let mut input = script.as_bytes();
        run_repl(&mut book, &storage, &settings, &view, &mut input).unwrap();

        (view, book, temp_dir)
    }

    #[test]
    fn test_greeting_and_goodbye() {
        let (view, _, _dir) = run_script("exit\n");
        assert!(view.saw("Welcome to the assistant bot!"));
        assert!(view.saw("Good bye"));
    }

    #[test]
    fn test_end_of_input_quits_and_saves() {
        let (view, _, dir) = run_script("add Alice 0123456789\n");
        assert!(view.saw("Contact added."));
        assert!(view.saw("Good bye"));
        assert!(dir.path().join("data").join("addressbook.json").exists());
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let (view, book, _dir) = run_script(
            "add Alice 12345\nbogus\nadd Alice 0123456789\nadd Alice 0123456789\nexit\n",
        );

        assert!(view.saw("Phone number must contain exactly 10 digits."));
        assert!(view.saw("Invalid command"));
        assert!(view.saw("Contact added."));
        assert!(view.saw("Phone number already exists: 0123456789"));
        assert_eq!(book.find("Alice").unwrap().phones.len(), 1);
    }

    #[test]
    fn test_hello_and_commands() {
        let (view, _, _dir) = run_script("hello\ncommands\nexit\n");
        assert!(view.saw("How can I help you?"));
        assert!(view.saw("Available commands:"));
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let (view, _, _dir) = run_script("\n   \nexit\n");
        assert!(!view.saw("Invalid command"));
    }

    #[test]
    fn test_all_lists_contacts() {
        let (view, _, _dir) =
            run_script("add Alice 0123456789\nadd Bob 5551234567\nall\nexit\n");
        assert!(view.saw("Alice"));
        assert!(view.saw("Bob"));
    }

    #[test]
    fn test_change_missing_contact_scenario() {
        let (view, _, _dir) = run_script("change Bob 1111111111 2222222222\nexit\n");
        assert!(view.saw("No matches found. Contact not updated."));
    }
}
