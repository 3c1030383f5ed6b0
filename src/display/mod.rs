//! Display formatting for terminal output
//!
//! Line formats shared by the reports and the interactive menu.

use crate::models::Money;

/// Shown instead of a listing when there is nothing to list
pub const EMPTY_LIST_MESSAGE: &str = "The purchase list is empty!";

/// A purchase as `"<name> $<amount>"`
pub fn purchase_line(name: &str, amount: Money) -> String {
    format!("{} {}", name, amount)
}

/// A category total as `"<label> - $<amount>"`
pub fn category_total_line(label: &str, amount: Money) -> String {
    format!("{} - {}", label, amount)
}

/// A closing total as `"Total sum: $<amount>"`
pub fn total_line(amount: Money) -> String {
    format!("Total sum: {}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_formats() {
        let amount = Money::from_cents(1205);
        assert_eq!(purchase_line("Movie night", amount), "Movie night $12.05");
        assert_eq!(category_total_line("Food", amount), "Food - $12.05");
        assert_eq!(total_line(Money::zero()), "Total sum: $0.00");
    }
}
