//! Output seam for the command loop
//!
//! Handlers talk to a `View` rather than printing directly, so the console
//! renderer is one variant among possible others. `RecordingView` captures
//! output for tests and scripted runs.

use std::cell::RefCell;

use crate::book::AddressBook;
use crate::display;
use crate::models::Record;

/// Help text for the `commands` command
const COMMANDS_HELP: &str = "\
Available commands:
  hello
  add <name> <phone>
  change <name> <old phone> <new phone>
  phone <name>
  add-birthday <name> <DD.MM.YYYY>
  show-birthday <name>
  birthdays
  all
  commands
  close / exit";

/// Everything the command loop can show the user
pub trait View {
    fn show_message(&self, message: &str);
    fn show_contact(&self, record: &Record);
    fn show_all_contacts(&self, book: &AddressBook);
    fn show_commands(&self);
}

/// Renders to stdout
pub struct ConsoleView;

impl View for ConsoleView {
    fn show_message(&self, message: &str) {
        println!("{}", message);
    }

    fn show_contact(&self, record: &Record) {
        println!("{}", record);
    }

    fn show_all_contacts(&self, book: &AddressBook) {
        println!("{}", display::format_contact_list(book).trim_end());
    }

    fn show_commands(&self) {
        println!("{}", COMMANDS_HELP);
    }
}

/// Captures every rendered line instead of printing
#[derive(Default)]
pub struct RecordingView {
    lines: RefCell<Vec<String>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything shown so far, in order
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Whether any shown line contains `needle`
    pub fn saw(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|l| l.contains(needle))
    }
}

impl View for RecordingView {
    fn show_message(&self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }

    fn show_contact(&self, record: &Record) {
        self.lines.borrow_mut().push(record.to_string());
    }

    fn show_all_contacts(&self, book: &AddressBook) {
        self.lines
            .borrow_mut()
            .push(display::format_contact_list(book));
    }

    fn show_commands(&self) {
        self.lines.borrow_mut().push(COMMANDS_HELP.to_string());
    }
}
