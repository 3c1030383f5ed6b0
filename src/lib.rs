//! Spendbook - Terminal-based personal purchase tracker
//!
//! This library provides the core functionality for the Spendbook purchase
//! tracker: it records income and categorized purchases, reports balances and
//! listings, sorts spending by amount, and persists everything to a flat text
//! file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, the ledger)
//! - `storage`: Text file format and persistence
//! - `services`: Totals and orderings
//! - `reports`: Listings, balance and analysis output
//! - `display`: Shared line formats
//! - `cli`: Interactive menu and one-shot commands
//!
//! # Example
//!
//! ```rust
//! use spendbook_cli::models::{Category, Ledger, Money};
//! use spendbook_cli::reports::AnalysisReport;
//!
//! let mut ledger = Ledger::new();
//! ledger.add_income(Money::from_cents(50000)).unwrap();
//! ledger.add_purchase(Category::Food, "Coffee", Money::from_cents(450)).unwrap();
//!
//! let report = AnalysisReport::sort_all(&ledger);
//! assert_eq!(report.format_terminal(), "All:\nCoffee $4.50\n");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendbookError, SpendbookResult};
