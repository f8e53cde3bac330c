//! Configuration module for the phonebook
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PhonebookPaths;
pub use settings::Settings;
