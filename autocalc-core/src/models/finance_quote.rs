use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::QuoteError;
use super::quote_error::{MAX_AMOUNT, MAX_PERCENT, check_magnitudes};

/// Inputs for an installment (loan) quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceQuote {
    pub vehicle_price: Decimal,
    pub down_payment: Decimal,
    pub trade_in_value: Decimal,
    /// Balance still owed on the trade-in vehicle.
    pub amount_owed: Decimal,
    pub rebates: Decimal,
    pub all_other_fees: Decimal,
    pub loan_term_months: u32,
    /// Annual interest as a percentage (`6.0` means 6%).
    pub annual_interest: Decimal,
    /// Sales tax as a percentage (`13.0` means 13%).
    pub sales_tax_percent: Decimal,
    /// Usually 12, 24 or 26.
    pub payments_per_year: u32,
    pub start_date: NaiveDate,
}

impl FinanceQuote {
    /// Trade-in value less the amount still owed on it. Negative when the
    /// trade-in is under water.
    pub fn net_trade_in(&self) -> Decimal {
        self.trade_in_value - self.amount_owed
    }

    /// Rejects zero payments per year and amounts or percentages beyond
    /// [`MAX_AMOUNT`] / [`MAX_PERCENT`].
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.payments_per_year == 0 {
            return Err(QuoteError::ZeroPaymentsPerYear);
        }
        check_magnitudes(
            [
                ("vehicle price", self.vehicle_price),
                ("down payment", self.down_payment),
                ("trade-in value", self.trade_in_value),
                ("amount owed", self.amount_owed),
                ("rebates", self.rebates),
                ("other fees", self.all_other_fees),
            ],
            MAX_AMOUNT,
        )?;
        check_magnitudes(
            [
                ("annual interest", self.annual_interest),
                ("sales tax", self.sales_tax_percent),
            ],
            MAX_PERCENT,
        )
    }
}

/// Output of [`FinanceCalculator`](crate::calculations::FinanceCalculator).
///
/// Every amount is unrounded; rounding to cents is left to presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceResult {
    /// Principal before sales tax.
    pub financed_before_tax: Decimal,
    pub sales_tax_amount: Decimal,
    /// Principal the annuity is computed on.
    pub financed_including_tax: Decimal,
    pub periodic_payment: Decimal,
    pub total_accumulated_interest: Decimal,
    /// Upfront payment plus every periodic payment.
    pub total_cost: Decimal,
    pub upfront_payment: Decimal,
    pub pay_off_date: NaiveDate,
    /// Number of periodic payments, never less than one.
    pub number_of_payments: u32,
}
