use rust_decimal::Decimal;
use thiserror::Error;

/// Largest magnitude accepted for any money amount (one trillion).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Largest magnitude accepted for any percentage input.
pub const MAX_PERCENT: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Errors raised when a quote is checked at the input boundary.
///
/// The calculators themselves never fail; callers run
/// [`FinanceQuote::validate`](crate::FinanceQuote::validate) or
/// [`LeaseQuote::validate`](crate::LeaseQuote::validate) first to reject
/// values the formulas cannot give a meaningful answer for.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuoteError {
    /// A periodic rate cannot be derived from zero payments per year.
    #[error("payments per year must be greater than zero")]
    ZeroPaymentsPerYear,

    /// An amount or percentage is too large for the calculations to stay
    /// within `Decimal` range.
    #[error("{field} of {value} is outside the supported range of ±{limit}")]
    OutOfRange {
        field: &'static str,
        value: Decimal,
        limit: Decimal,
    },
}

/// Checks every `(field, value)` pair against `limit`, reporting the first
/// one whose magnitude exceeds it.
pub(crate) fn check_magnitudes<const N: usize>(
    values: [(&'static str, Decimal); N],
    limit: Decimal,
) -> Result<(), QuoteError> {
    match values.into_iter().find(|(_, value)| value.abs() > limit) {
        Some((field, value)) => Err(QuoteError::OutOfRange {
            field,
            value,
            limit,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn limits_have_the_documented_values() {
        assert_eq!(MAX_AMOUNT, dec!(1000000000000));
        assert_eq!(MAX_PERCENT, dec!(1000));
    }
}
