//! Business logic layer for Spendbook
//!
//! Services read the ledger and derive totals and orderings for reports.

pub mod sorting;
pub mod summary;

pub use sorting::{sort_descending, sort_descending_by};
pub use summary::SummaryService;
