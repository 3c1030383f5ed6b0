//! CLI command handlers
//!
//! This module contains the interactive menu and the one-shot commands,
//! bridging user input with the ledger, reports and storage.

pub mod commands;
pub mod input;
pub mod menu;

pub use commands::{handle_ledger_command, AnalyzeTarget, LedgerCommands};
pub use menu::Session;
