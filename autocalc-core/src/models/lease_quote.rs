use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::QuoteError;
use super::quote_error::{MAX_AMOUNT, MAX_PERCENT, check_magnitudes};

/// Inputs for a lease quote.
///
/// Shares most field names with [`FinanceQuote`](crate::FinanceQuote) but is
/// deliberately a separate type: the two products are priced differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseQuote {
    pub vehicle_price: Decimal,
    pub down_payment: Decimal,
    pub trade_in_value: Decimal,
    pub amount_owed: Decimal,
    pub rebates: Decimal,
    pub all_other_fees: Decimal,
    /// Residual value as a percentage of the vehicle price.
    pub residual_percent: Decimal,
    pub lease_term_months: u32,
    pub annual_interest: Decimal,
    pub sales_tax_percent: Decimal,
    pub payments_per_year: u32,
    pub start_date: NaiveDate,
}

impl LeaseQuote {
    pub fn net_trade_in(&self) -> Decimal {
        self.trade_in_value - self.amount_owed
    }

    /// Same limits as [`FinanceQuote::validate`](crate::FinanceQuote::validate),
    /// with the residual counted as a percentage.
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
                ("residual", self.residual_percent),
                ("annual interest", self.annual_interest),
                ("sales tax", self.sales_tax_percent),
            ],
            MAX_PERCENT,
        )
    }
}

/// Output of [`LeaseCalculator`](crate::calculations::LeaseCalculator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseResult {
    /// Depreciation, tax and finance fee for one period.
    pub periodic_payment: Decimal,
    pub upfront_payment: Decimal,
    /// Depreciation portion (cap cost less residual).
    pub leased_before_tax: Decimal,
    /// Tax levied on the depreciation portion only.
    pub sales_tax_amount: Decimal,
    pub leased_including_tax: Decimal,
    /// Sum of the per-period finance fees.
    pub total_accumulated_interest: Decimal,
    pub total_lease_cost: Decimal,
    pub residual_value_amount: Decimal,
    /// Buy-out price at lease end with sales tax applied.
    pub residual_value_including_tax: Decimal,
    pub pay_off_date: NaiveDate,
    pub number_of_payments: u32,
}
