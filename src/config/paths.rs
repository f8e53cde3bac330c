//! Path management for the phonebook
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `PHONEBOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/phonebook-cli` or `~/.config/phonebook-cli`
//! 3. Windows: `%APPDATA%\phonebook-cli`

use std::path::PathBuf;

use crate::error::PhonebookError;

/// Manages all paths used by the phonebook
#[derive(Debug, Clone)]
pub struct PhonebookPaths {
    /// Base directory for all phonebook data
    base_dir: PathBuf,
}

impl PhonebookPaths {
    /// Create a new PhonebookPaths instance
    ///
    /// Path resolution:
    /// 1. `PHONEBOOK_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/phonebook-cli` or `~/.config/phonebook-cli`
    /// 3. Windows: `%APPDATA%\phonebook-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PhonebookError> {
        let base_dir = if let Ok(custom) = std::env::var("PHONEBOOK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PhonebookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/phonebook-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/phonebook-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to addressbook.json
    pub fn book_file(&self) -> PathBuf {
        self.data_dir().join("addressbook.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/phonebook-cli/)
    /// - Data directory (~/.config/phonebook-cli/data/)
    pub fn ensure_directories(&self) -> Result<(), PhonebookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PhonebookError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PhonebookError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the phonebook has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PhonebookError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| {
                    PhonebookError::Config("Could not determine home directory".into())
                })
        })?;
    Ok(config_base.join("phonebook-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PhonebookError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PhonebookError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("phonebook-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PhonebookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.book_file(),
            temp_dir.path().join("data").join("addressbook.json")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("PHONEBOOK_DATA_DIR", custom_path);

        let paths = PhonebookPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("PHONEBOOK_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PhonebookPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PhonebookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }
}
