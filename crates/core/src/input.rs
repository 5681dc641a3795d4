//! Boundary parsers for values typed by a user.
//!
//! Screens collect counts and cash totals as free text. These functions turn
//! that text into well-typed numbers, so the calculators downstream only ever
//! see valid input.

use crate::error::{DomainError, DomainResult};
use crate::money::Money;

/// Parse a physical count: a whole, non-negative number of units.
pub fn parse_count(raw: &str) -> DomainResult<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_input("count is required"));
    }

    let value: i64 = trimmed.parse().map_err(|_| {
        tracing::warn!(input = trimmed, "rejected non-numeric count");
        DomainError::invalid_input(format!("count must be a whole number, got {trimmed:?}"))
    })?;

    if value < 0 {
        tracing::warn!(value, "rejected negative count");
        return Err(DomainError::invalid_input("count cannot be negative"));
    }
    Ok(value)
}

/// Parse a money amount (e.g. counted cash) into exact cents. Must be a
/// non-negative decimal with at most two fraction digits.
pub fn parse_amount(raw: &str) -> DomainResult<Money> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_input("amount is required"));
    }

    let value: Money = trimmed.parse().map_err(|_| {
        tracing::warn!(input = trimmed, "rejected malformed amount");
        DomainError::invalid_input(format!("amount must be a number, got {trimmed:?}"))
    })?;

    if value.is_negative() {
        return Err(DomainError::invalid_input("amount cannot be negative"));
    }
    Ok(value)
}
