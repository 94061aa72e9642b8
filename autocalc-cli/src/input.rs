//! Parsing of raw text values into quote inputs.
//!
//! The `*_or` helpers never fail: blank or unparseable text falls back to
//! the supplied default, and the fallback is logged.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Trims whitespace, a leading `$` and thousands commas.
fn normalize_decimal_input(s: &str) -> String {
    let trimmed = s.trim();
    trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .trim()
        .replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and a leading
/// dollar sign. Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| ParseDecimalError {
        input: s.to_string(),
        source: e,
    })
}

/// Parses a currency amount, falling back to `default` when blank or invalid.
pub fn parse_amount_or(
    s: &str,
    default: Decimal,
) -> Decimal {
    if s.trim().is_empty() {
        return default;
    }
    parse_decimal(s).unwrap_or_else(|e| {
        warn!(%default, "{e}, using default");
        default
    })
}

/// Parses a percentage such as `"6.59"` or `"6.59%"`, falling back to
/// `default` when blank or invalid.
pub fn parse_percent_or(
    s: &str,
    default: Decimal,
) -> Decimal {
    let trimmed = s.trim();
    parse_amount_or(trimmed.strip_suffix('%').unwrap_or(trimmed), default)
}

/// Parses a whole count (term months, payments per year), falling back to
/// `default` when blank or invalid.
pub fn parse_count_or(
    s: &str,
    default: u32,
) -> u32 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return default;
    }
    trimmed.parse().unwrap_or_else(|e| {
        warn!(input = %s, default, "invalid count: {e}, using default");
        default
    })
}

/// Parses an ISO `YYYY-MM-DD` date, falling back to `default` when blank or
/// invalid.
pub fn parse_date_or(
    s: &str,
    default: NaiveDate,
) -> NaiveDate {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return default;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").unwrap_or_else(|e| {
        warn!(input = %s, %default, "invalid date: {e}, using default");
        default
    })
}
