//! Path management for Spendbook
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDBOOK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/spendbook` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SpendbookError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SPENDBOOK_DATA_DIR";

/// Manages the paths used by Spendbook
#[derive(Debug, Clone)]
pub struct SpendbookPaths {
    base_dir: PathBuf,
}

impl SpendbookPaths {
    /// Create a new SpendbookPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SpendbookError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SpendbookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SpendbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendbookError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, SpendbookError> {
    ProjectDirs::from("", "", "spendbook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SpendbookError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(DATA_DIR_ENV, temp_dir.path());
        let paths = SpendbookPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().join("spendbook"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
