//! Line-oriented text format for the purchases file
//!
//! ```text
//! <balance>
//! Food
//! <name> $<amount>
//! END
//! Clothes
//! END
//! Entertainment
//! END
//! Other
//! END
//! ```
//!
//! Names may contain spaces; the amount is whatever follows the last space.

use tracing::warn;

use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{Category, Ledger, Money};

/// Terminates each category block
pub const END_MARKER: &str = "END";

/// A purchase line that could not be restored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub category: Category,
    pub name: String,
    pub raw_price: String,
}

impl SkippedEntry {
    /// The warning reported for this entry
    pub fn to_error(&self) -> SpendbookError {
        SpendbookError::CorruptPersistedEntry {
            name: self.name.clone(),
            raw_price: self.raw_price.clone(),
        }
    }
}

/// Result of decoding a purchases file
#[derive(Debug, Clone)]
pub struct DecodedLedger {
    pub ledger: Ledger,
    pub skipped: Vec<SkippedEntry>,
}

/// Serialize a ledger to the purchases file format
pub fn encode(ledger: &Ledger) -> String {
    let mut output = String::new();
    output.push_str(&ledger.balance().to_plain_string());
    output.push('\n');

    for category in Category::ALL {
        output.push_str(category.label());
        output.push('\n');
        for (name, amount) in ledger.purchases(category) {
            output.push_str(&format!("{} ${}\n", name, amount.to_plain_string()));
        }
        output.push_str(END_MARKER);
        output.push('\n');
    }

    output
}

/// Parse a purchases file into a fresh ledger
///
/// Fails only when the balance line is unusable. Malformed purchase lines are
/// skipped and reported in `DecodedLedger::skipped`. Expenses are recomputed
/// from the purchases that were restored. A file that ends early yields empty
/// lists for the blocks it is missing.
pub fn decode(text: &str) -> SpendbookResult<DecodedLedger> {
    let mut lines = text.lines();

    let balance_line = lines.next().unwrap_or_default();
    let mut ledger = Ledger::new();
    let balance = Money::parse(balance_line)
        .map_err(|_| SpendbookError::CorruptPersistedBalance(balance_line.to_string()))?;
    ledger
        .add_income(balance)
        .map_err(|_| SpendbookError::CorruptPersistedBalance(balance_line.to_string()))?;

    let mut skipped = Vec::new();

    'blocks: for category in Category::ALL {
        // Block label; its text is not checked.
        if lines.next().is_none() {
            break;
        }

        loop {
            let Some(line) = lines.next() else {
                break 'blocks;
            };
            if line.trim_end() == END_MARKER {
                break;
            }

            // Entries the ledger refuses, such as one that would overflow
            // the expenses total, are skipped like unreadable ones.
            let restored = parse_entry(line).and_then(|(name, price, amount)| {
                ledger
                    .add_purchase(category, name, amount)
                    .map(|_| ())
                    .map_err(|_| (name.to_string(), price.to_string()))
            });

            if let Err((name, raw_price)) = restored {
                let entry = SkippedEntry {
                    category,
                    name,
                    raw_price,
                };
                warn!(
                    category = category.label(),
                    name = %entry.name,
                    raw_price = %entry.raw_price,
                    "skipping purchase with unreadable price"
                );
                skipped.push(entry);
            }
        }
    }

    Ok(DecodedLedger { ledger, skipped })
}

/// Split `"<name> $<amount>"` at the last space
///
/// On failure returns the name and raw price text for the warning.
fn parse_entry(line: &str) -> Result<(&str, &str, Money), (String, String)> {
    let line = line.trim_end();
    let Some((name, price)) = line.rsplit_once(' ') else {
        return Err((line.to_string(), String::new()));
    };

    let amount = price
        .strip_prefix('$')
        .and_then(|digits| Money::parse(digits).ok())
        .ok_or_else(|| (name.to_string(), price.to_string()))?;

    Ok((name, price, amount))
}
