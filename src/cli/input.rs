//! Conversion of raw user input into menu choices and amounts

use crate::error::{SpendbookError, SpendbookResult};
use crate::models::Money;

/// Parse a numeric menu choice
pub fn parse_choice(input: &str) -> SpendbookResult<u8> {
    input
        .trim()
        .parse()
        .map_err(|_| SpendbookError::invalid_number(input.trim()))
}

/// Parse a non-negative amount such as `"12.50"`
pub fn parse_amount(input: &str) -> SpendbookResult<Money> {
    let amount = Money::parse(input)?;
    if amount.is_negative() {
        return Err(SpendbookError::invalid_number(input.trim()));
    }
    Ok(amount)
}
