//! User settings for the phonebook
//!
//! Manages user preferences, currently the horizon used by the
//! upcoming-birthdays query.

use serde::{Deserialize, Serialize};

use super::paths::PhonebookPaths;
use crate::error::PhonebookError;

/// User settings for the phonebook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How many days ahead the `birthdays` command looks
    #[serde(default = "default_horizon_days")]
    pub upcoming_horizon_days: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_horizon_days() -> u32 {
    7
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            upcoming_horizon_days: default_horizon_days(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PhonebookPaths) -> Result<Self, PhonebookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PhonebookError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PhonebookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PhonebookPaths) -> Result<(), PhonebookError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PhonebookError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| PhonebookError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
