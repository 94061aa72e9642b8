//! Text rendering of calculation results and the saved-quote history.
//!
//! All rounding happens here: amounts are shown to the cent (half-up),
//! history lines to the whole dollar.

use std::fmt;

use autocalc_core::calculations::common::round_half_up;
use autocalc_core::{
    FinanceQuote, FinanceResult, LeaseQuote, LeaseResult, PaymentFrequency, SavedQuote,
};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// `$ 1234.50`
pub fn format_currency(amount: Decimal) -> String {
    format!("$ {:.2}", round_half_up(amount))
}

/// `6.59%`
pub fn format_percent(percent: Decimal) -> String {
    format!("{:.2}%", round_half_up(percent))
}

/// Whole dollars without a space, as used in history lines: `$44000`.
pub fn format_whole_dollars(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.0}")
}

/// Medium-style date: `Jan 15, 2032`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Monthly`, `Semi-Monthly`, `Bi-Weekly`, or the bare count otherwise.
pub fn frequency_label(payments_per_year: u32) -> String {
    PaymentFrequency::from_payments_per_year(payments_per_year)
        .map(|f| f.label().to_string())
        .unwrap_or_else(|| payments_per_year.to_string())
}

/// Result screen for a finance quote.
#[derive(Debug, Clone, Copy)]
pub struct FinanceReport<'a> {
    pub quote: &'a FinanceQuote,
    pub result: &'a FinanceResult,
}

impl fmt::Display for FinanceReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let (q, r) = (self.quote, self.result);
        writeln!(f, "Finance term:                {} mo", q.loan_term_months)?;
        writeln!(
            f,
            "Payment / interest rate:     {}   {} ({})",
            format_currency(r.periodic_payment),
            format_percent(q.annual_interest),
            frequency_label(q.payments_per_year)
        )?;
        writeln!(f, "Upfront payment:             {}", format_currency(r.upfront_payment))?;
        writeln!(f, "Trade-in amount:             {}", format_currency(q.net_trade_in()))?;
        writeln!(f, "Financed before tax:         {}", format_currency(r.financed_before_tax))?;
        writeln!(f, "Sales tax:                   {}", format_currency(r.sales_tax_amount))?;
        writeln!(
            f,
            "Financed including tax:      {}",
            format_currency(r.financed_including_tax)
        )?;
        writeln!(
            f,
            "Total accumulated interest:  {}",
            format_currency(r.total_accumulated_interest)
        )?;
        writeln!(f, "Total cost:                  {}", format_currency(r.total_cost))?;
        write!(f, "Pay-off date:                {}", format_date(r.pay_off_date))
    }
}

/// Result screen for a lease quote.
#[derive(Debug, Clone, Copy)]
pub struct LeaseReport<'a> {
    pub quote: &'a LeaseQuote,
    pub result: &'a LeaseResult,
}

impl fmt::Display for LeaseReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let (q, r) = (self.quote, self.result);
        writeln!(f, "Lease term:                  {} mo", q.lease_term_months)?;
        writeln!(
            f,
            "Payment / interest rate:     {}   {} ({})",
            format_currency(r.periodic_payment),
            format_percent(q.annual_interest),
            frequency_label(q.payments_per_year)
        )?;
        writeln!(f, "Upfront payment:             {}", format_currency(r.upfront_payment))?;
        writeln!(f, "Trade-in amount:             {}", format_currency(q.net_trade_in()))?;
        writeln!(f, "Leased before tax:           {}", format_currency(r.leased_before_tax))?;
        writeln!(f, "Sales tax:                   {}", format_currency(r.sales_tax_amount))?;
        writeln!(
            f,
            "Leased including tax:        {}",
            format_currency(r.leased_including_tax)
        )?;
        writeln!(
            f,
            "Total accumulated interest:  {}",
            format_currency(r.total_accumulated_interest)
        )?;
        writeln!(f, "Total lease cost:            {}", format_currency(r.total_lease_cost))?;
        writeln!(
            f,
            "Residual value before tax:   {}",
            format_currency(r.residual_value_amount)
        )?;
        writeln!(
            f,
            "Residual value after tax:    {}",
            format_currency(r.residual_value_including_tax)
        )?;
        write!(f, "Lease end date:              {}", format_date(r.pay_off_date))
    }
}

/// One entry of the saved-quote history.
#[derive(Debug, Clone, Copy)]
pub struct SavedQuoteSummary<'a>(pub &'a SavedQuote);

impl SavedQuoteSummary<'_> {
    /// `$44000 - 84 Month Financing Quote`
    pub fn title(&self) -> String {
        let q = self.0;
        format!(
            "{} - {} Month {} Quote",
            format_whole_dollars(q.vehicle_price),
            q.term_months,
            q.quote_type.label()
        )
    }

    /// `$726 Monthly - 6.00% Interest - $0 Down - 13.00% Tax Included`
    pub fn subtitle(&self) -> String {
        let q = self.0;
        format!(
            "{} {} - {} Interest - {} Down - {} Tax Included",
            format_whole_dollars(q.payment),
            frequency_label(q.payments_per_year),
            format_percent(q.interest_rate),
            format_whole_dollars(q.down_payment),
            format_percent(q.sales_tax_percent)
        )
    }
}

/// Numbered history list, one title and subtitle per quote.
pub fn history(quotes: &[SavedQuote]) -> String {
    if quotes.is_empty() {
        return "No saved quotes.".to_string();
    }
    quotes
        .iter()
        .enumerate()
        .map(|(index, quote)| {
            let summary = SavedQuoteSummary(quote);
            format!("[{index}] {}\n    {}", summary.title(), summary.subtitle())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
