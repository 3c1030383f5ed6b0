//! Summary service
//!
//! Computes per-category and overall purchase totals for reporting. A total of
//! `None` means the selection holds no purchases at all, which is reported
//! differently from a selection whose purchases sum to zero.

use crate::models::{Category, CategorySelector, Ledger, Money};

/// Service for purchase totals
pub struct SummaryService<'a> {
    ledger: &'a Ledger,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Sum of a category's purchases, or `None` if it has none
    pub fn category_total(&self, category: Category) -> Option<Money> {
        let purchases = self.ledger.purchases(category);
        if purchases.is_empty() {
            None
        } else {
            Some(purchases.values().sum())
        }
    }

    /// Sum over every category, or `None` if every category is empty
    pub fn grand_total(&self) -> Option<Money> {
        Category::ALL
            .into_iter()
            .filter_map(|category| self.category_total(category))
            .reduce(|acc, total| acc + total)
    }

    /// Total for a report selection
    pub fn selection_total(&self, selector: CategorySelector) -> Option<Money> {
        match selector {
            CategorySelector::Single(category) => self.category_total(category),
            CategorySelector::All => self.grand_total(),
        }
    }

    /// Every category with its total, empty categories counting as zero
    pub fn category_totals(&self) -> Vec<(Category, Money)> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.category_total(category).unwrap_or_default()))
            .collect()
    }

    /// Income left after expenses, never below zero
    pub fn available_balance(&self) -> Money {
        self.ledger.available_balance()
    }
}
