//! Common numeric helpers for quote calculations.
//!
//! This module provides the arithmetic shared by the finance and lease
//! calculators (payment counts, periodic rates, the annuity formula and
//! calendar month addition) plus the cent rounding used by presentation.

use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, MathematicalOps};
use tracing::{debug, warn};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero. The calculators never
/// call this; it is applied only when amounts are displayed.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use autocalc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(726.3373)), dec!(726.34));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns `percent` percent of `amount` (`percent_of(200, 13) == 26`).
pub fn percent_of(
    amount: Decimal,
    percent: Decimal,
) -> Decimal {
    amount * percent / Decimal::ONE_HUNDRED
}

/// Number of payments over a term: `floor(term_months * payments_per_year / 12)`,
/// never less than one.
///
/// # Examples
///
/// ```
/// use autocalc_core::calculations::common::total_payments;
///
/// assert_eq!(total_payments(84, 12), 84);
/// assert_eq!(total_payments(48, 26), 104);
/// assert_eq!(total_payments(0, 12), 1);
/// ```
pub fn total_payments(
    term_months: u32,
    payments_per_year: u32,
) -> u32 {
    let count = u64::from(term_months) * u64::from(payments_per_year) / 12;
    u32::try_from(count).unwrap_or(u32::MAX).max(1)
}

/// Converts an annual percentage into the rate for one payment period.
///
/// Zero payments per year has no meaningful period; the rate is taken as
/// zero so the calculators stay total. Callers are expected to reject that
/// input before calculating.
pub fn periodic_rate(
    annual_percent: Decimal,
    payments_per_year: u32,
) -> Decimal {
    if payments_per_year == 0 {
        warn!(%annual_percent, "zero payments per year, using a zero periodic rate");
        return Decimal::ZERO;
    }
    annual_percent / Decimal::ONE_HUNDRED / Decimal::from(payments_per_year)
}

/// Level payment that repays `principal` over `periods` at `rate` per period.
///
/// Uses `A = P * r / (1 - (1 + r)^-n)`, or `P / n` when the rate is zero.
/// `periods` below one is treated as one.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use autocalc_core::calculations::common::{annuity_payment, round_half_up};
///
/// let payment = annuity_payment(dec!(49720), dec!(0.005), 84);
/// assert_eq!(round_half_up(payment), dec!(726.34));
///
/// assert_eq!(annuity_payment(dec!(1200), dec!(0), 12), dec!(100));
/// ```
pub fn annuity_payment(
    principal: Decimal,
    rate: Decimal,
    periods: u32,
) -> Decimal {
    let periods = periods.max(1);
    let n = Decimal::from(periods);
    if rate.is_zero() {
        return principal / n;
    }

    // (1 + r)^-n; a growth factor too large to represent discounts to zero.
    let discount = match (Decimal::ONE + rate).checked_powu(u64::from(periods)) {
        Some(growth) if growth.is_zero() => return principal / n,
        Some(growth) => Decimal::ONE.checked_div(growth).unwrap_or(Decimal::ZERO),
        None => Decimal::ZERO,
    };

    let denominator = Decimal::ONE - discount;
    if denominator.is_zero() {
        return principal / n;
    }
    principal * rate / denominator
}

/// Adds calendar months to `date`, clamping to the end of shorter months
/// (Jan 31 + 1 month is Feb 28/29).
///
/// When the result falls outside the supported calendar range `date`
/// is returned unchanged.
pub fn add_months(
    date: NaiveDate,
    months: u32,
) -> NaiveDate {
    match date.checked_add_months(Months::new(months)) {
        Some(end) => end,
        None => {
            debug!(%date, months, "month addition out of range, keeping start date");
            date
        }
    }
}
