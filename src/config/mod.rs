//! Configuration module for Spendbook
//!
//! This module provides configuration management including:
//! - Platform path resolution for the settings file
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendbookPaths;
pub use settings::Settings;
