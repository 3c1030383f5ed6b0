//! Core data models for Spendbook
//!
//! This module contains the data structures that represent the tracker's
//! domain: money amounts, purchase categories and the ledger itself.

pub mod category;
pub mod ledger;
pub mod money;

pub use category::{Category, CategorySelector};
pub use ledger::{Ledger, PurchaseList};
pub use money::Money;
