//! Reports module for Spendbook
//!
//! Provides the purchase listing, the balance summary and the sorted
//! spending analysis.

pub mod analysis;
pub mod balance;
pub mod purchase_list;

pub use analysis::AnalysisReport;
pub use balance::BalanceReport;
pub use purchase_list::{ListedPurchase, PurchaseListReport};
