//! Spending analysis
//!
//! Orders purchases, or category totals, from largest to smallest amount.

use crate::display::{category_total_line, purchase_line, total_line, EMPTY_LIST_MESSAGE};
use crate::models::{Category, Ledger, Money};
use crate::services::{sort_descending, sort_descending_by, SummaryService};

/// A sorted view of the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisReport {
    /// Every purchase across all categories
    AllPurchases(Vec<(String, Money)>),
    /// Category totals, empty categories counting as zero
    ByType {
        totals: Vec<(Category, Money)>,
        total: Money,
    },
    /// Purchases of a single category
    SingleCategory {
        category: Category,
        purchases: Vec<(String, Money)>,
    },
}

impl AnalysisReport {
    /// Sort every purchase in the ledger
    ///
    /// A name used in more than one category appears once per category.
    pub fn sort_all(ledger: &Ledger) -> Self {
        let sorted = sort_descending(
            ledger
                .all_purchases()
                .map(|(_, name, amount)| (name.to_string(), amount)),
        );
        Self::AllPurchases(sorted)
    }

    /// Sort the four category totals
    pub fn sort_by_type(ledger: &Ledger) -> Self {
        let totals = SummaryService::new(ledger).category_totals();
        let total: Money = totals.iter().map(|(_, amount)| *amount).sum();

        let totals = sort_descending_by(totals, |a: &Category, b: &Category| {
            a.label().cmp(b.label())
        });

        Self::ByType { totals, total }
    }

    /// Sort the purchases of one category
    pub fn sort_category(ledger: &Ledger, category: Category) -> Self {
        let sorted = sort_descending(
            ledger
                .purchases(category)
                .iter()
                .map(|(name, amount)| (name.clone(), *amount)),
        );
        Self::SingleCategory {
            category,
            purchases: sorted,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        match self {
            Self::AllPurchases(purchases) if purchases.is_empty() => {
                lines.push(EMPTY_LIST_MESSAGE.to_string());
            }
            Self::AllPurchases(purchases) => {
                lines.push("All:".to_string());
                lines.extend(purchases.iter().map(|(name, amount)| purchase_line(name, *amount)));
            }
            Self::ByType { totals, total } => {
                lines.push("Types:".to_string());
                lines.extend(
                    totals
                        .iter()
                        .map(|(category, amount)| category_total_line(category.label(), *amount)),
                );
                lines.push(total_line(*total));
            }
            Self::SingleCategory { purchases, .. } if purchases.is_empty() => {
                lines.push(EMPTY_LIST_MESSAGE.to_string());
            }
            Self::SingleCategory {
                category,
                purchases,
            } => {
                lines.push(format!("{}:", category.label()));
                lines.extend(purchases.iter().map(|(name, amount)| purchase_line(name, *amount)));
            }
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}
