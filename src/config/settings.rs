//! User settings for Spendbook

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::paths::SpendbookPaths;
use crate::error::SpendbookError;
use crate::storage::{write_text_atomic, DEFAULT_PURCHASES_FILE};

/// User settings for Spendbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Where purchases are saved; relative paths resolve against the
    /// working directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchases_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            purchases_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &SpendbookPaths) -> Result<Self, SpendbookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SpendbookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            Ok(serde_json::from_str(&contents)?)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendbookPaths) -> Result<(), SpendbookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;
        write_text_atomic(paths.settings_file(), &contents)
    }

    /// Pick the purchases file: explicit override, then settings, then
    /// `purchases.txt` in the working directory
    pub fn resolve_purchases_file(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.purchases_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PURCHASES_FILE))
    }
}
