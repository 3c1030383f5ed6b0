//! Custom error types for Spendbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Spendbook operations
#[derive(Error, Debug)]
pub enum SpendbookError {
    /// Malformed decimal or integer input
    #[error("Wrong number format: {0:?}")]
    InvalidNumberFormat(String),

    /// A load was requested but the purchases file does not exist
    #[error("File with purchases not found: {}", .0.display())]
    MissingPersistenceFile(PathBuf),

    /// The first line of a purchases file is not a valid amount
    #[error("Balance in file is a wrong number: {0:?}")]
    CorruptPersistedBalance(String),

    /// A single purchase line could not be parsed
    #[error("Purchase \"{name}\" is skipped because something is wrong with the price")]
    CorruptPersistedEntry { name: String, raw_price: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for amounts and names
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SpendbookError {
    /// Create an invalid number error from the offending input
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumberFormat(input.into())
    }

    /// Check if this is a number format error
    pub fn is_invalid_number(&self) -> bool {
        matches!(self, Self::InvalidNumberFormat(_))
    }

    /// Check if this is a missing purchases file error
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::MissingPersistenceFile(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SpendbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Spendbook operations
pub type SpendbookResult<T> = Result<T, SpendbookError>;
