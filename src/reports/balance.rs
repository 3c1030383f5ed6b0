//! Balance report

use crate::models::{Ledger, Money};
use crate::services::SummaryService;

/// Income remaining after expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceReport {
    pub available: Money,
}

impl BalanceReport {
    pub fn generate(ledger: &Ledger) -> Self {
        Self {
            available: SummaryService::new(ledger).available_balance(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        format!("Balance: {}\n", self.available)
    }
}
