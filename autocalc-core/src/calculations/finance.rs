//! Installment loan calculations.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Net trade-in: trade-in value - amount owed |
//! | 2    | Financed before tax: price + fees - down payment - rebates - net trade-in |
//! | 3    | Sales tax: step 2 × tax rate |
//! | 4    | Financed including tax: step 2 + step 3 |
//! | 5    | Number of payments: floor(term × payments per year / 12), at least 1 |
//! | 6    | Periodic rate: annual rate / payments per year |
//! | 7    | Periodic payment from the annuity formula |
//! | 8    | Total interest: payment × n - step 4 |
//! | 9    | Total cost: down payment + payment × n |
//! | 10   | Pay-off date: start date + term in months |
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use autocalc_core::FinanceQuote;
//! use autocalc_core::calculations::FinanceCalculator;
//! use autocalc_core::calculations::common::round_half_up;
//!
//! let quote = FinanceQuote {
//!     vehicle_price: dec!(44000),
//!     down_payment: dec!(0),
//!     trade_in_value: dec!(0),
//!     amount_owed: dec!(0),
//!     rebates: dec!(0),
//!     all_other_fees: dec!(0),
//!     loan_term_months: 84,
//!     annual_interest: dec!(6),
//!     sales_tax_percent: dec!(13),
//!     payments_per_year: 12,
//!     start_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
//! };
//!
//! let result = FinanceCalculator::calculate(&quote);
//!
//! assert_eq!(result.financed_including_tax, dec!(49720));
//! assert_eq!(round_half_up(result.periodic_payment), dec!(726.34));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{
    add_months, annuity_payment, percent_of, periodic_rate, total_payments,
};
use crate::models::{FinanceQuote, FinanceResult};

/// Calculator for installment financing.
///
/// Stateless; [`FinanceCalculator::calculate`] is a pure function of the quote.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinanceCalculator;

impl FinanceCalculator {
    /// Calculates the payment schedule summary for a finance quote.
    ///
    /// Never fails. Degenerate terms produce a single payment, and zero
    /// payments per year is calculated at a zero rate (see
    /// [`periodic_rate`]); run [`FinanceQuote::validate`] first to reject it.
    pub fn calculate(quote: &FinanceQuote) -> FinanceResult {
        let financed_before_tax = Self::financed_before_tax(quote);
        let sales_tax_amount = percent_of(financed_before_tax, quote.sales_tax_percent);
        let financed_including_tax = financed_before_tax + sales_tax_amount;

        let number_of_payments = total_payments(quote.loan_term_months, quote.payments_per_year);
        let rate = periodic_rate(quote.annual_interest, quote.payments_per_year);
        let periodic_payment = annuity_payment(financed_including_tax, rate, number_of_payments);

        let paid_over_term = periodic_payment * Decimal::from(number_of_payments);
        let total_accumulated_interest = paid_over_term - financed_including_tax;

        let upfront_payment = quote.down_payment;
        let total_cost = upfront_payment + paid_over_term;
        let pay_off_date = add_months(quote.start_date, quote.loan_term_months);

        debug!(
            %financed_including_tax,
            %periodic_payment,
            number_of_payments,
            "finance quote calculated"
        );

        FinanceResult {
            financed_before_tax,
            sales_tax_amount,
            financed_including_tax,
            periodic_payment,
            total_accumulated_interest,
            total_cost,
            upfront_payment,
            pay_off_date,
            number_of_payments,
        }
    }

    /// Principal before tax. The net trade-in is subtracted, so a negative
    /// trade-in (more owed than it is worth) increases the principal.
    fn financed_before_tax(quote: &FinanceQuote) -> Decimal {
        quote.vehicle_price + quote.all_other_fees
            - quote.down_payment
            - quote.rebates
            - quote.net_trade_in()
    }
}
