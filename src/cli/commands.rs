//! One-shot CLI commands
//!
//! Each command loads the purchases file (starting empty if there is none),
//! applies one change or prints one report, and saves when something changed.

use std::str::FromStr;

use clap::Subcommand;

use super::input::parse_amount;
use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{Category, CategorySelector, Ledger, Money};
use crate::reports::{AnalysisReport, BalanceReport, PurchaseListReport};
use crate::storage::PurchaseStore;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Add income to the balance
    Income {
        /// Amount (e.g., "1500" or "1500.00")
        #[arg(value_parser = parse_amount)]
        amount: Money,
    },

    /// Record a purchase
    Purchase {
        /// Category name or number (food, clothes, entertainment, other)
        category: Category,

        /// Purchase name; re-using a name replaces that purchase
        name: String,

        /// Price (e.g., "4.99")
        #[arg(value_parser = parse_amount)]
        amount: Money,
    },

    /// List purchases with their total
    List {
        /// Category name or number, or "all"
        #[arg(default_value = "all")]
        category: CategorySelector,
    },

    /// Show income left after purchases
    Balance,

    /// Sort purchases from largest to smallest
    Analyze {
        /// "all", "types", or a category name
        target: AnalyzeTarget,
    },
}

/// What the analyze command sorts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeTarget {
    All,
    Types,
    Category(Category),
}

impl FromStr for AnalyzeTarget {
    type Err = SpendbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(AnalyzeTarget::All),
            "types" | "type" => Ok(AnalyzeTarget::Types),
            other => other.parse().map(AnalyzeTarget::Category),
        }
    }
}

/// Handle a ledger command
pub fn handle_ledger_command(store: &PurchaseStore, cmd: LedgerCommands) -> SpendbookResult<()> {
    let mut ledger = load_ledger(store)?;

    match cmd {
        LedgerCommands::Income { amount } => {
            ledger.add_income(amount)?;
            store.save(&ledger)?;
            println!("Income was added!");
            println!("{}", BalanceReport::generate(&ledger).format_terminal().trim_end());
        }

        LedgerCommands::Purchase {
            category,
            name,
            amount,
        } => {
            let replaced = ledger.add_purchase(category, name.as_str(), amount)?;
            store.save(&ledger)?;
            match replaced {
                Some(old) => println!(
                    "Purchase \"{}\" in {} was updated ({} -> {})",
                    name, category, old, amount
                ),
                None => println!("Purchase was added!"),
            }
        }

        LedgerCommands::List { category } => {
            print!("{}", PurchaseListReport::generate(&ledger, category).format_terminal());
        }

        LedgerCommands::Balance => {
            print!("{}", BalanceReport::generate(&ledger).format_terminal());
        }

        LedgerCommands::Analyze { target } => {
            let report = match target {
                AnalyzeTarget::All => AnalysisReport::sort_all(&ledger),
                AnalyzeTarget::Types => AnalysisReport::sort_by_type(&ledger),
                AnalyzeTarget::Category(category) => {
                    AnalysisReport::sort_category(&ledger, category)
                }
            };
            print!("{}", report.format_terminal());
        }
    }

    Ok(())
}

/// Load the ledger, reporting skipped entries on stderr
fn load_ledger(store: &PurchaseStore) -> SpendbookResult<Ledger> {
    let decoded = store.load_or_default()?;
    for entry in &decoded.skipped {
        eprintln!("{}", entry.to_error());
    }
    Ok(decoded.ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, PurchaseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = PurchaseStore::new(temp_dir.path().join("purchases.txt"));
        (temp_dir, store)
    }

    #[test]
    fn test_parse_analyze_target() {
        assert_eq!("all".parse::<AnalyzeTarget>().unwrap(), AnalyzeTarget::All);
        assert_eq!("Types".parse::<AnalyzeTarget>().unwrap(), AnalyzeTarget::Types);
        assert_eq!(
            "clothes".parse::<AnalyzeTarget>().unwrap(),
            AnalyzeTarget::Category(Category::Clothes)
        );
        assert!("everything".parse::<AnalyzeTarget>().is_err());
    }

    #[test]
    fn test_income_creates_file() {
        let (_temp_dir, store) = create_test_store();

        handle_ledger_command(
            &store,
            LedgerCommands::Income {
                amount: Money::from_cents(250000),
            },
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.ledger.balance(), Money::from_cents(250000));
    }

    #[test]
    fn test_purchases_accumulate_across_commands() {
        let (_temp_dir, store) = create_test_store();

        for (name, cents) in [("Pizza", 1299), ("Salad", 899), ("Pizza", 1099)] {
            handle_ledger_command(
                &store,
                LedgerCommands::Purchase {
                    category: Category::Food,
                    name: name.to_string(),
                    amount: Money::from_cents(cents),
                },
            )
            .unwrap();
        }

        let ledger = store.load().unwrap().ledger;
        assert_eq!(ledger.purchases(Category::Food).len(), 2);
        assert_eq!(ledger.expenses(), Money::from_cents(1998));
    }

    #[test]
    fn test_report_commands_leave_missing_file_absent() {
        let (_temp_dir, store) = create_test_store();

        handle_ledger_command(&store, LedgerCommands::Balance).unwrap();
        handle_ledger_command(
            &store,
            LedgerCommands::Analyze {
                target: AnalyzeTarget::Types,
            },
        )
        .unwrap();

        assert!(!store.exists());
    }

    #[test]
    fn test_corrupt_file_aborts_command() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), "abc\n").unwrap();

        let result = handle_ledger_command(
            &store,
            LedgerCommands::Income {
                amount: Money::from_cents(100),
            },
        );
        assert!(matches!(
            result.unwrap_err(),
            SpendbookError::CorruptPersistedBalance(_)
        ));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "abc\n");
    }
}
