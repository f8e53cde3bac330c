//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod contact;

pub use contact::{format_contact_list, format_upcoming};
