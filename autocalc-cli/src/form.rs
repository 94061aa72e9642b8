//! Command-line quote forms.
//!
//! Each field is the raw text the user typed, left `None` when the flag is
//! absent. Converting a form fills gaps and unparseable values from the
//! configured defaults, then validates the finished quote.

use autocalc_core::{FinanceQuote, LeaseQuote, QuoteError};
use chrono::NaiveDate;
use clap::Args;

use crate::config::{FinanceDefaults, LeaseDefaults};
use crate::input::{parse_amount_or, parse_count_or, parse_date_or, parse_percent_or};

/// Raw finance inputs.
#[derive(Debug, Clone, Default, Args)]
pub struct FinanceForm {
    /// Vehicle price, e.g. `44,000`
    #[arg(long)]
    pub vehicle_price: Option<String>,

    #[arg(long)]
    pub down_payment: Option<String>,

    #[arg(long)]
    pub trade_in_value: Option<String>,

    /// Balance still owed on the trade-in
    #[arg(long)]
    pub amount_owed: Option<String>,

    #[arg(long)]
    pub rebates: Option<String>,

    #[arg(long)]
    pub all_other_fees: Option<String>,

    /// Loan term in months
    #[arg(long)]
    pub term_months: Option<String>,

    /// Annual interest rate in percent, e.g. `6` or `6%`
    #[arg(long)]
    pub annual_interest: Option<String>,

    /// Sales tax in percent
    #[arg(long)]
    pub sales_tax: Option<String>,

    /// 12 (monthly), 24 (semi-monthly) or 26 (bi-weekly)
    #[arg(long)]
    pub payments_per_year: Option<String>,

    /// First payment period start, `YYYY-MM-DD` (defaults to today)
    #[arg(long)]
    pub start_date: Option<String>,
}

/// Raw lease inputs.
#[derive(Debug, Clone, Default, Args)]
pub struct LeaseForm {
    /// Vehicle price, e.g. `44,000`
    #[arg(long)]
    pub vehicle_price: Option<String>,

    #[arg(long)]
    pub down_payment: Option<String>,

    #[arg(long)]
    pub trade_in_value: Option<String>,

    /// Balance still owed on the trade-in
    #[arg(long)]
    pub amount_owed: Option<String>,

    #[arg(long)]
    pub rebates: Option<String>,

    #[arg(long)]
    pub all_other_fees: Option<String>,

    /// Residual value in percent of the vehicle price
    #[arg(long)]
    pub residual_percent: Option<String>,

    /// Lease term in months
    #[arg(long)]
    pub term_months: Option<String>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub annual_interest: Option<String>,

    /// Sales tax in percent
    #[arg(long)]
    pub sales_tax: Option<String>,

    /// 12 (monthly), 24 (semi-monthly) or 26 (bi-weekly)
    #[arg(long)]
    pub payments_per_year: Option<String>,

    /// Lease start, `YYYY-MM-DD` (defaults to today)
    #[arg(long)]
    pub start_date: Option<String>,
}

fn raw(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

impl FinanceForm {
    /// Builds a validated quote; `today` is used when no start date is given.
    pub fn to_quote(
        &self,
        defaults: &FinanceDefaults,
        today: NaiveDate,
    ) -> Result<FinanceQuote, QuoteError> {
        let quote = FinanceQuote {
            vehicle_price: parse_amount_or(raw(&self.vehicle_price), defaults.vehicle_price),
            down_payment: parse_amount_or(raw(&self.down_payment), defaults.down_payment),
            trade_in_value: parse_amount_or(raw(&self.trade_in_value), defaults.trade_in_value),
            amount_owed: parse_amount_or(raw(&self.amount_owed), defaults.amount_owed),
            rebates: parse_amount_or(raw(&self.rebates), defaults.rebates),
            all_other_fees: parse_amount_or(raw(&self.all_other_fees), defaults.all_other_fees),
            loan_term_months: parse_count_or(raw(&self.term_months), defaults.term_months),
            annual_interest: parse_percent_or(raw(&self.annual_interest), defaults.annual_interest),
            sales_tax_percent: parse_percent_or(raw(&self.sales_tax), defaults.sales_tax_percent),
            payments_per_year: parse_count_or(
                raw(&self.payments_per_year),
                defaults.payments_per_year,
            ),
            start_date: parse_date_or(raw(&self.start_date), today),
        };
        quote.validate()?;
        Ok(quote)
    }
}

impl LeaseForm {
    /// Builds a validated quote; `today` is used when no start date is given.
    pub fn to_quote(
        &self,
        defaults: &LeaseDefaults,
        today: NaiveDate,
    ) -> Result<LeaseQuote, QuoteError> {
        let quote = LeaseQuote {
            vehicle_price: parse_amount_or(raw(&self.vehicle_price), defaults.vehicle_price),
            down_payment: parse_amount_or(raw(&self.down_payment), defaults.down_payment),
            trade_in_value: parse_amount_or(raw(&self.trade_in_value), defaults.trade_in_value),
            amount_owed: parse_amount_or(raw(&self.amount_owed), defaults.amount_owed),
            rebates: parse_amount_or(raw(&self.rebates), defaults.rebates),
            all_other_fees: parse_amount_or(raw(&self.all_other_fees), defaults.all_other_fees),
            residual_percent: parse_percent_or(
                raw(&self.residual_percent),
                defaults.residual_percent,
            ),
            lease_term_months: parse_count_or(raw(&self.term_months), defaults.term_months),
            annual_interest: parse_percent_or(raw(&self.annual_interest), defaults.annual_interest),
            sales_tax_percent: parse_percent_or(raw(&self.sales_tax), defaults.sales_tax_percent),
            payments_per_year: parse_count_or(
                raw(&self.payments_per_year),
                defaults.payments_per_year,
            ),
            start_date: parse_date_or(raw(&self.start_date), today),
        };
        quote.validate()?;
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn empty_finance_form_uses_defaults() {
        let quote = FinanceForm::default()
            .to_quote(&FinanceDefaults::default(), today())
            .unwrap();

        assert_eq!(quote.vehicle_price, dec!(44000));
        assert_eq!(quote.loan_term_months, 84);
        assert_eq!(quote.annual_interest, dec!(6));
        assert_eq!(quote.sales_tax_percent, dec!(13));
        assert_eq!(quote.payments_per_year, 12);
        assert_eq!(quote.start_date, today());
    }

    #[test]
    fn finance_form_values_override_defaults() {
        let form = FinanceForm {
            vehicle_price: Some("$32,500".into()),
            down_payment: Some("2,000".into()),
            term_months: Some("60".into()),
            annual_interest: Some("4.99%".into()),
            payments_per_year: Some("26".into()),
            start_date: Some("2025-03-31".into()),
            ..Default::default()
        };

        let quote = form.to_quote(&FinanceDefaults::default(), today()).unwrap();

        assert_eq!(quote.vehicle_price, dec!(32500));
        assert_eq!(quote.down_payment, dec!(2000));
        assert_eq!(quote.loan_term_months, 60);
        assert_eq!(quote.annual_interest, dec!(4.99));
        assert_eq!(quote.payments_per_year, 26);
        assert_eq!(quote.start_date, NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
    }

    #[test]
    fn invalid_finance_values_fall_back_to_defaults() {
        let form = FinanceForm {
            vehicle_price: Some("lots".into()),
            term_months: Some("seven years".into()),
            ..Default::default()
        };

        let quote = form.to_quote(&FinanceDefaults::default(), today()).unwrap();

        assert_eq!(quote.vehicle_price, dec!(44000));
        assert_eq!(quote.loan_term_months, 84);
    }

    #[test]
    fn zero_frequency_is_rejected() {
        let form = FinanceForm {
            payments_per_year: Some("0".into()),
            ..Default::default()
        };

        let result = form.to_quote(&FinanceDefaults::default(), today());

        assert_eq!(result, Err(QuoteError::ZeroPaymentsPerYear));
    }

    #[test]
    fn empty_lease_form_uses_defaults() {
        let quote = LeaseForm::default()
            .to_quote(&LeaseDefaults::default(), today())
            .unwrap();

        assert_eq!(quote.lease_term_months, 48);
        assert_eq!(quote.residual_percent, dec!(48));
        assert_eq!(quote.annual_interest, dec!(6.59));
    }

    #[test]
    fn lease_form_accepts_residual_with_percent_sign() {
        let form = LeaseForm {
            residual_percent: Some("55%".into()),
            payments_per_year: Some("0".into()),
            ..Default::default()
        };

        assert_eq!(
            form.to_quote(&LeaseDefaults::default(), today()),
            Err(QuoteError::ZeroPaymentsPerYear)
        );

        let form = LeaseForm {
            payments_per_year: None,
            ..form
        };
        let quote = form.to_quote(&LeaseDefaults::default(), today()).unwrap();

        assert_eq!(quote.residual_percent, dec!(55));
    }

    #[test]
    fn oversized_price_is_rejected() {
        let form = FinanceForm {
            vehicle_price: Some("70000000000000000000000000000".into()),
            ..Default::default()
        };

        let result = form.to_quote(&FinanceDefaults::default(), today());

        assert!(matches!(
            result,
            Err(QuoteError::OutOfRange { field: "vehicle price", .. })
        ));
    }

    #[test]
    fn oversized_config_default_is_rejected() {
        let defaults = LeaseDefaults {
            all_other_fees: dec!(5000000000000),
            ..Default::default()
        };

        let result = LeaseForm::default().to_quote(&defaults, today());

        assert!(matches!(
            result,
            Err(QuoteError::OutOfRange { field: "other fees", .. })
        ));
    }
}
