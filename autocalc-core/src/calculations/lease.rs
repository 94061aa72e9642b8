//! Lease payment calculations.
//!
//! A lease payment has three parts, each spread evenly over the payments:
//!
//! | Part         | Amount |
//! |--------------|--------|
//! | Depreciation | (cap cost - residual) / n |
//! | Sales tax    | depreciation × tax rate / n |
//! | Finance fee  | (cap cost + residual) / 2 × periodic rate |
//!
//! The residual is always a percentage of the vehicle price, not of the cap
//! cost, and sales tax is charged on the depreciation only. The finance fee
//! is the usual rent charge on the average balance rather than interest on a
//! declining loan balance.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{add_months, percent_of, periodic_rate, total_payments};
use crate::models::{LeaseQuote, LeaseResult};

/// Calculator for leases.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaseCalculator;

impl LeaseCalculator {
    /// Calculates the lease payment and totals for a quote. Never fails.
    pub fn calculate(quote: &LeaseQuote) -> LeaseResult {
        let cap_cost = Self::cap_cost(quote);
        let residual_value_amount = percent_of(quote.vehicle_price, quote.residual_percent);
        let depreciation = cap_cost - residual_value_amount;

        let number_of_payments = total_payments(quote.lease_term_months, quote.payments_per_year);
        let n = Decimal::from(number_of_payments);

        let sales_tax_amount = percent_of(depreciation, quote.sales_tax_percent);
        let depreciation_fee = depreciation / n;
        let tax_fee = sales_tax_amount / n;

        let rate = periodic_rate(quote.annual_interest, quote.payments_per_year);
        let average_balance = (cap_cost + residual_value_amount) / Decimal::TWO;
        let finance_fee = average_balance * rate;

        let periodic_payment = depreciation_fee + tax_fee + finance_fee;
        let total_accumulated_interest = finance_fee * n;

        let upfront_payment = quote.down_payment;
        let total_lease_cost = upfront_payment + periodic_payment * n;
        let pay_off_date = add_months(quote.start_date, quote.lease_term_months);

        let residual_value_including_tax = residual_value_amount
            * (Decimal::ONE + quote.sales_tax_percent / Decimal::ONE_HUNDRED);

        debug!(
            %cap_cost,
            %residual_value_amount,
            %periodic_payment,
            number_of_payments,
            "lease quote calculated"
        );

        LeaseResult {
            periodic_payment,
            upfront_payment,
            leased_before_tax: depreciation,
            sales_tax_amount,
            leased_including_tax: depreciation + sales_tax_amount,
            total_accumulated_interest,
            total_lease_cost,
            residual_value_amount,
            residual_value_including_tax,
            pay_off_date,
            number_of_payments,
        }
    }

    /// Capitalized cost: the lease principal before the residual is split off.
    fn cap_cost(quote: &LeaseQuote) -> Decimal {
        quote.vehicle_price + quote.all_other_fees
            - quote.down_payment
            - quote.rebates
            - quote.net_trade_in()
    }
}
