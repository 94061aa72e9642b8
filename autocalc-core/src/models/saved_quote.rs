use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FinanceQuote, FinanceResult, LeaseQuote, LeaseResult, QuoteType};

/// Flattened snapshot of a finance or lease calculation kept for the
/// history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedQuote {
    pub quote_type: QuoteType,
    pub vehicle_price: Decimal,
    pub term_months: u32,
    pub payments_per_year: u32,
    pub payment: Decimal,
    pub interest_rate: Decimal,
    pub down_payment: Decimal,
    pub sales_tax_percent: Decimal,
    pub total_cost: Decimal,
    pub date_saved: DateTime<Utc>,
}

impl SavedQuote {
    pub fn from_finance(
        quote: &FinanceQuote,
        result: &FinanceResult,
        date_saved: DateTime<Utc>,
    ) -> Self {
        Self {
            quote_type: QuoteType::Finance,
            vehicle_price: quote.vehicle_price,
            term_months: quote.loan_term_months,
            payments_per_year: quote.payments_per_year,
            payment: result.periodic_payment,
            interest_rate: quote.annual_interest,
            down_payment: quote.down_payment,
            sales_tax_percent: quote.sales_tax_percent,
            total_cost: result.total_cost,
            date_saved,
        }
    }

    pub fn from_lease(
        quote: &LeaseQuote,
        result: &LeaseResult,
        date_saved: DateTime<Utc>,
    ) -> Self {
        Self {
            quote_type: QuoteType::Lease,
            vehicle_price: quote.vehicle_price,
            term_months: quote.lease_term_months,
            payments_per_year: quote.payments_per_year,
            payment: result.periodic_payment,
            interest_rate: quote.annual_interest,
            down_payment: quote.down_payment,
            sales_tax_percent: quote.sales_tax_percent,
            total_cost: result.total_lease_cost,
            date_saved,
        }
    }
}
