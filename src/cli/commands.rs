//! REPL command parsing
//!
//! One command per line, whitespace-tokenized. The command name is
//! case-insensitive; arguments keep their case. Extra tokens beyond what a
//! command needs are ignored.

use thiserror::Error;

/// A parsed REPL command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    All,
    Commands,
    Exit,
}

/// Errors raised while turning a line into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid command")]
    Unknown,

    #[error("Insufficient arguments provided. Usage: {usage}")]
    InsufficientArguments { usage: &'static str },
}

impl Command {
    /// Parse a line of input; `Ok(None)` means a blank line to skip
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match name.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => match args.as_slice() {
                [name, phone, ..] => Self::Add {
                    name: (*name).to_string(),
                    phone: (*phone).to_string(),
                },
                _ => return Err(ParseError::InsufficientArguments {
                    usage: "add <name> <phone>",
                }),
            },
            "change" => match args.as_slice() {
                [name, old, new, ..] => Self::Change {
                    name: (*name).to_string(),
                    old: (*old).to_string(),
                    new: (*new).to_string(),
                },
                _ => return Err(ParseError::InsufficientArguments {
                    usage: "change <name> <old phone> <new phone>",
                }),
            },
            "phone" => match args.as_slice() {
                [name, ..] => Self::Phone {
                    name: (*name).to_string(),
                },
                _ => return Err(ParseError::InsufficientArguments {
                    usage: "phone <name>",
                }),
            },
            "add-birthday" => match args.as_slice() {
                [name, date, ..] => Self::AddBirthday {
                    name: (*name).to_string(),
                    date: (*date).to_string(),
                },
                _ => return Err(ParseError::InsufficientArguments {
                    usage: "add-birthday <name> <DD.MM.YYYY>",
                }),
            },
            "show-birthday" => match args.as_slice() {
                [name, ..] => Self::ShowBirthday {
                    name: (*name).to_string(),
                },
                _ => return Err(ParseError::InsufficientArguments {
                    usage: "show-birthday <name>",
                }),
            },
            "birthdays" => Self::Birthdays,
            "all" => Self::All,
            "commands" => Self::Commands,
            "close" | "exit" => Self::Exit,
            _ => return Err(ParseError::Unknown),
        };

        Ok(Some(command))
    }
}
