use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use phonebook::cli::run_repl;
use phonebook::config::{paths::PhonebookPaths, settings::Settings};
use phonebook::storage::Storage;
use phonebook::view::ConsoleView;

#[derive(Parser)]
#[command(
    name = "phonebook",
    version,
    about = "Terminal-based contact book with birthday reminders",
    long_about = "Phonebook stores contacts with phone numbers and birthdays, \
                  persists them between runs, and reminds you of birthdays \
                  coming up in the next week."
)]
struct Cli {
    /// Override the data directory
    #[arg(long, env = "PHONEBOOK_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive command loop (the default)
    Repl,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => PhonebookPaths::with_base_dir(dir),
        None => PhonebookPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("Phonebook Configuration");
            println!("=======================");
            println!("Base directory: {}", storage.paths().base_dir().display());
            println!("Data file:      {}", storage.paths().book_file().display());
            println!();
            println!("Settings:");
            println!("  Upcoming horizon: {} days", settings.upcoming_horizon_days);
        }
        Some(Commands::Repl) | None => {
            let mut book = storage.load_book()?;
            let view = ConsoleView;
            let stdin = io::stdin();
            let mut input = stdin.lock();
            run_repl(&mut book, &storage, &settings, &view, &mut input)?;
        }
    }

    Ok(())
}
