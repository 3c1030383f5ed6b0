//! The purchase ledger
//!
//! Holds accumulated income and one purchase list per storage category.
//! `expenses` is kept equal to the sum of every stored purchase amount.

use std::collections::BTreeMap;

use tracing::debug;

use super::category::Category;
use super::money::Money;
use crate::error::{SpendbookError, SpendbookResult};

/// Purchases within one category, keyed by name
pub type PurchaseList = BTreeMap<String, Money>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    balance: Money,
    expenses: Money,
    purchases: [PurchaseList; 4],
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Total income added so far
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Sum of all stored purchase amounts
    pub fn expenses(&self) -> Money {
        self.expenses
    }

    /// Income left after expenses, never below zero
    pub fn available_balance(&self) -> Money {
        self.balance.saturating_sub_floor(self.expenses)
    }

    /// Add income to the balance
    pub fn add_income(&mut self, amount: Money) -> SpendbookResult<()> {
        if amount.is_negative() {
            return Err(SpendbookError::Validation(format!(
                "Income cannot be negative: {}",
                amount
            )));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| too_large("Balance", self.balance, amount))?;
        debug!(amount = %amount, balance = %self.balance, "income added");
        Ok(())
    }

    /// Store a purchase, replacing any purchase with the same name in that
    /// category. Returns the replaced amount, if any.
    pub fn add_purchase(
        &mut self,
        category: Category,
        name: impl Into<String>,
        amount: Money,
    ) -> SpendbookResult<Option<Money>> {
        let name = name.into();
        validate_purchase_name(&name)?;
        if amount.is_negative() {
            return Err(SpendbookError::Validation(format!(
                "Price cannot be negative: {}",
                amount
            )));
        }

        let list = &mut self.purchases[category.index()];
        let base = match list.get(&name) {
            Some(old) => self.expenses.checked_sub(*old),
            None => Some(self.expenses),
        };
        let expenses = base
            .and_then(|total| total.checked_add(amount))
            .ok_or_else(|| too_large("Expenses", self.expenses, amount))?;

        let replaced = list.insert(name.clone(), amount);
        self.expenses = expenses;

        debug!(
            category = category.label(),
            name = %name,
            amount = %amount,
            replaced = replaced.is_some(),
            "purchase added"
        );
        Ok(replaced)
    }

    /// Purchases stored under a category
    pub fn purchases(&self, category: Category) -> &PurchaseList {
        &self.purchases[category.index()]
    }

    /// Iterate every purchase in category order
    pub fn all_purchases(&self) -> impl Iterator<Item = (Category, &str, Money)> + '_ {
        Category::ALL.into_iter().flat_map(move |category| {
            self.purchases(category)
                .iter()
                .map(move |(name, amount)| (category, name.as_str(), *amount))
        })
    }

    /// Number of stored purchases across all categories
    pub fn purchase_count(&self) -> usize {
        self.purchases.iter().map(|list| list.len()).sum()
    }

    /// True when no category holds any purchase
    pub fn has_no_purchases(&self) -> bool {
        self.purchases.iter().all(|list| list.is_empty())
    }
}

fn too_large(what: &str, current: Money, amount: Money) -> SpendbookError {
    SpendbookError::Validation(format!(
        "{} of {} cannot grow by {}: amount too large",
        what, current, amount
    ))
}

/// Names are written one per line in the purchases file
fn validate_purchase_name(name: &str) -> SpendbookResult<()> {
    if name.trim().is_empty() {
        return Err(SpendbookError::Validation(
            "Purchase name cannot be empty".into(),
        ));
    }
    if name.contains(|c: char| c == '\n' || c == '\r') {
        return Err(SpendbookError::Validation(
            "Purchase name cannot contain line breaks".into(),
        ));
    }
    Ok(())
}
