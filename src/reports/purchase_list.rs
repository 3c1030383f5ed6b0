//! Purchase listing
//!
//! Lists the purchases of one category, or of all of them, with their total.

use crate::display::{purchase_line, total_line, EMPTY_LIST_MESSAGE};
use crate::models::{CategorySelector, Ledger, Money};
use crate::services::SummaryService;

/// One listed purchase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedPurchase {
    pub name: String,
    pub amount: Money,
}

/// Purchases for a category selection
#[derive(Debug, Clone)]
pub struct PurchaseListReport {
    pub selector: CategorySelector,
    /// Purchases in category order, then name order
    pub purchases: Vec<ListedPurchase>,
    /// `None` when the selection holds no purchases
    pub total: Option<Money>,
}

impl PurchaseListReport {
    pub fn generate(ledger: &Ledger, selector: CategorySelector) -> Self {
        let purchases = selector
            .categories()
            .into_iter()
            .flat_map(|category| ledger.purchases(category).iter())
            .map(|(name, amount)| ListedPurchase {
                name: name.clone(),
                amount: *amount,
            })
            .collect();

        Self {
            selector,
            purchases,
            total: SummaryService::new(ledger).selection_total(selector),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_none()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str(self.selector.label());
        output.push('\n');

        match self.total {
            None => {
                output.push_str(EMPTY_LIST_MESSAGE);
                output.push('\n');
            }
            Some(total) => {
                for purchase in &self.purchases {
                    output.push_str(&purchase_line(&purchase.name, purchase.amount));
                    output.push('\n');
                }
                output.push_str(&total_line(total));
                output.push('\n');
            }
        }

        output
    }
}
