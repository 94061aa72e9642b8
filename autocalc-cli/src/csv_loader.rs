//! CSV loader for batches of finance and lease quotes.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Values are
//! trimmed before parsing.
//!
//! | Column              | Required   | Type    | Notes |
//! |---------------------|------------|---------|-------|
//! | `quote_type`        | yes        | string  | `finance` or `lease` |
//! | `vehicle_price`     | yes        | decimal | |
//! | `term_months`       | yes        | integer | loan or lease term |
//! | `annual_interest`   | yes        | decimal | percent, e.g. `6.59` |
//! | `sales_tax_percent` | yes        | decimal | percent |
//! | `payments_per_year` | yes        | integer | 12, 24 or 26 |
//! | `start_date`        | yes        | date    | `YYYY-MM-DD` |
//! | `down_payment`      | no         | decimal | empty or absent = 0 |
//! | `trade_in_value`    | no         | decimal | empty or absent = 0 |
//! | `amount_owed`       | no         | decimal | empty or absent = 0 |
//! | `rebates`           | no         | decimal | empty or absent = 0 |
//! | `all_other_fees`    | no         | decimal | empty or absent = 0 |
//! | `residual_percent`  | lease only | decimal | ignored for finance rows |
//!
//! ### Example
//!
//! ```csv
//! quote_type,vehicle_price,term_months,annual_interest,sales_tax_percent,payments_per_year,start_date,down_payment,residual_percent
//! finance,44000,84,6,13,12,2025-01-15,,
//! lease,44000,48,6.59,13,12,2025-01-15,2000,48
//! ```
use std::path::Path;

use autocalc_core::{FinanceQuote, LeaseQuote, QuoteError, QuoteType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::app::QuoteRequest;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

// Decimals are read from the field text; the default path goes through f64.
#[derive(Debug, Deserialize)]
struct CsvRow {
    quote_type: String,
    #[serde(with = "rust_decimal::serde::str")]
    vehicle_price: Decimal,
    term_months: u32,
    #[serde(with = "rust_decimal::serde::str")]
    annual_interest: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    sales_tax_percent: Decimal,
    payments_per_year: u32,
    start_date: NaiveDate,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    down_payment: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    trade_in_value: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    amount_owed: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    rebates: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    all_other_fees: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    residual_percent: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read CSV file: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `quote_type` was neither `finance` nor `lease`. Rows are 1-based
    /// (header = row 0).
    #[error("unrecognised quote type '{value}' on row {row}")]
    InvalidQuoteType { value: String, row: usize },

    /// A lease row left `residual_percent` empty.
    #[error("lease on row {row} has no residual_percent")]
    MissingResidual { row: usize },

    /// The row parsed but does not describe a quote that can be calculated.
    #[error("row {row}: {source}")]
    InvalidQuote {
        row: usize,
        #[source]
        source: QuoteError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into a quote request.
///
/// row_number is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<QuoteRequest, CsvLoadError> {
    let quote_type =
        QuoteType::parse(&row.quote_type).ok_or_else(|| CsvLoadError::InvalidQuoteType {
            value: row.quote_type.clone(),
            row: row_number,
        })?;
    let invalid = |source| CsvLoadError::InvalidQuote {
        row: row_number,
        source,
    };

    let request = match quote_type {
        QuoteType::Finance => {
            let quote = FinanceQuote {
                vehicle_price: row.vehicle_price,
                down_payment: row.down_payment.unwrap_or_default(),
                trade_in_value: row.trade_in_value.unwrap_or_default(),
                amount_owed: row.amount_owed.unwrap_or_default(),
                rebates: row.rebates.unwrap_or_default(),
                all_other_fees: row.all_other_fees.unwrap_or_default(),
                loan_term_months: row.term_months,
                annual_interest: row.annual_interest,
                sales_tax_percent: row.sales_tax_percent,
                payments_per_year: row.payments_per_year,
                start_date: row.start_date,
            };
            quote.validate().map_err(invalid)?;
            QuoteRequest::Finance(quote)
        }
        QuoteType::Lease => {
            let residual_percent = row
                .residual_percent
                .ok_or(CsvLoadError::MissingResidual { row: row_number })?;
            let quote = LeaseQuote {
                vehicle_price: row.vehicle_price,
                down_payment: row.down_payment.unwrap_or_default(),
                trade_in_value: row.trade_in_value.unwrap_or_default(),
                amount_owed: row.amount_owed.unwrap_or_default(),
                rebates: row.rebates.unwrap_or_default(),
                all_other_fees: row.all_other_fees.unwrap_or_default(),
                residual_percent,
                lease_term_months: row.term_months,
                annual_interest: row.annual_interest,
                sales_tax_percent: row.sales_tax_percent,
                payments_per_year: row.payments_per_year,
                start_date: row.start_date,
            };
            quote.validate().map_err(invalid)?;
            QuoteRequest::Lease(quote)
        }
    };
    Ok(request)
}

/// Parse CSV text (the full file contents as a &str) and return the quote
/// requests in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] – if the CSV is structurally invalid or a
///   required field cannot be deserialised.
/// * [CsvLoadError::InvalidQuoteType] – unknown `quote_type`.
/// * [CsvLoadError::MissingResidual] – lease row without a residual.
/// * [CsvLoadError::InvalidQuote] – the quote fails validation.
pub fn load_from_str(input: &str) -> Result<Vec<QuoteRequest>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            let row_number = idx + 1; // 1-based for user-facing messages
            convert_row(row, row_number)
        })
        .collect()
}

/// Convenience wrapper: read a file from disk and delegate to [load_from_str].
///
/// # Errors
///
/// [CsvLoadError::Io] when the file cannot be read, otherwise the same
/// errors as [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<QuoteRequest>, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const MINIMAL_CSV: &str = "\
quote_type,vehicle_price,term_months,annual_interest,sales_tax_percent,payments_per_year,start_date
finance,44000,84,6,13,12,2025-01-15
";

    const MIXED_CSV: &str = "\
quote_type,vehicle_price,term_months,annual_interest,sales_tax_percent,payments_per_year,start_date,down_payment,trade_in_value,amount_owed,rebates,all_other_fees,residual_percent
finance,38500.00,72,4.9,13,26,2025-02-01,3000,8000,2500,500,899,
lease,44000,48,6.59,13,12,2025-01-15,,,,,,48
Lease , 52000 , 36 , 3.9 , 8.25 , 24 , 2025-06-30 , 5000 , , , , , 57
";

    #[test]
    fn test_minimal_csv_parses_finance_row() {
        let requests = load_from_str(MINIMAL_CSV).expect("should parse minimal CSV");

        assert_eq!(requests.len(), 1);
        let QuoteRequest::Finance(quote) = &requests[0] else {
            panic!("expected a finance request");
        };
        assert_eq!(quote.vehicle_price, dec!(44000));
        assert_eq!(quote.loan_term_months, 84);
        assert_eq!(quote.payments_per_year, 12);
        assert_eq!(quote.start_date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn test_minimal_csv_optional_amounts_default_to_zero() {
        let requests = load_from_str(MINIMAL_CSV).unwrap();
        let QuoteRequest::Finance(quote) = &requests[0] else {
            panic!("expected a finance request");
        };

        assert_eq!(quote.down_payment, Decimal::ZERO);
        assert_eq!(quote.trade_in_value, Decimal::ZERO);
        assert_eq!(quote.amount_owed, Decimal::ZERO);
        assert_eq!(quote.rebates, Decimal::ZERO);
        assert_eq!(quote.all_other_fees, Decimal::ZERO);
    }

    #[test]
    fn test_mixed_csv_preserves_row_order_and_types() {
        let requests = load_from_str(MIXED_CSV).expect("should parse mixed CSV");

        let types: Vec<_> = requests.iter().map(QuoteRequest::quote_type).collect();
        assert_eq!(
            types,
            vec![QuoteType::Finance, QuoteType::Lease, QuoteType::Lease]
        );
    }

    #[test]
    fn test_mixed_csv_finance_row_values() {
        let requests = load_from_str(MIXED_CSV).unwrap();
        let QuoteRequest::Finance(quote) = &requests[0] else {
            panic!("expected a finance request");
        };

        assert_eq!(quote.vehicle_price, dec!(38500.00));
        assert_eq!(quote.down_payment, dec!(3000));
        assert_eq!(quote.net_trade_in(), dec!(5500));
        assert_eq!(quote.all_other_fees, dec!(899));
        assert_eq!(quote.payments_per_year, 26);
    }

    #[test]
    fn test_mixed_csv_trims_whitespace_and_case() {
        let requests = load_from_str(MIXED_CSV).unwrap();
        let QuoteRequest::Lease(quote) = &requests[2] else {
            panic!("expected a lease request");
        };

        assert_eq!(quote.vehicle_price, dec!(52000));
        assert_eq!(quote.residual_percent, dec!(57));
        assert_eq!(quote.sales_tax_percent, dec!(8.25));
        assert_eq!(quote.down_payment, dec!(5000));
        assert_eq!(quote.trade_in_value, Decimal::ZERO);
    }

    #[test]
    fn test_unknown_quote_type_reports_row() {
        let csv = "\
quote_type,vehicle_price,term_months,annual_interest,sales_tax_percent,payments_per_year,start_date
finance,44000,84,6,13,12,2025-01-15
rental,44000,84,6,13,12,2025-01-15
";
        let err = load_from_str(csv).unwrap_err();

        match err {
            CsvLoadError::InvalidQuoteType { value, row } => {
                assert_eq!(value, "rental");
                assert_eq!(row, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lease_without_residual_is_rejected() {
        let csv = "\
quote_type,vehicle_price,term_months,annual_interest,sales_tax_percent,payments_per_year,start_date,residual_percent
lease,44000,48,6.59,13,12,2025-01-15,
";
        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(err, CsvLoadError::MissingResidual { row: 1 }));
    }

    #[test]
    fn test_zero_payments_per_year_is_rejected() {
        let csv = "\
quote_type,vehicle_price,term_months,annual_interest,sales_tax_percent,payments_per_year,start_date
finance,44000,84,6,13,0,2025-01-15
";
        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(
            err,
            CsvLoadError::InvalidQuote {
                row: 1,
                source: QuoteError::ZeroPaymentsPerYear
            }
        ));
    }

    #[test]
    fn test_missing_required_column_is_parse_error() {
        let csv = "\
quote_type,vehicle_price,annual_interest,sales_tax_percent,payments_per_year,start_date
finance,44000,6,13,12,2025-01-15
";
        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(err, CsvLoadError::Parse(_)));
    }

    #[test]
    fn test_bad_date_is_parse_error() {
        let csv = "\
quote_type,vehicle_price,term_months,annual_interest,sales_tax_percent,payments_per_year,start_date
finance,44000,84,6,13,12,15/01/2025
";
        assert!(matches!(load_from_str(csv), Err(CsvLoadError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_from_file(Path::new("/nonexistent/quotes.csv")).unwrap_err();

        assert!(matches!(err, CsvLoadError::Io(_)));
    }

    #[test]
    fn test_decimal_fields_keep_every_digit() {
        let csv = "\
quote_type,vehicle_price,term_months,annual_interest,sales_tax_percent,payments_per_year,start_date,down_payment,residual_percent
lease,44000.123456789012345,48,6.590000000000001,13,12,2025-01-15,1999.999999999999999,48.0000000000000001
";
        let requests = load_from_str(csv).unwrap();
        let QuoteRequest::Lease(quote) = &requests[0] else {
            panic!("expected a lease request");
        };

        assert_eq!(quote.vehicle_price, dec!(44000.123456789012345));
        assert_eq!(quote.annual_interest, dec!(6.590000000000001));
        assert_eq!(quote.down_payment, dec!(1999.999999999999999));
        assert_eq!(quote.residual_percent, dec!(48.0000000000000001));
    }

    #[test]
    fn test_non_numeric_amount_is_parse_error() {
        let csv = "\
quote_type,vehicle_price,term_months,annual_interest,sales_tax_percent,payments_per_year,start_date,down_payment
finance,44000,84,6,13,12,2025-01-15,lots
";
        assert!(matches!(load_from_str(csv), Err(CsvLoadError::Parse(_))));
    }

    #[test]
    fn test_oversized_amount_is_invalid_quote() {
        let csv = "\
quote_type,vehicle_price,term_months,annual_interest,sales_tax_percent,payments_per_year,start_date
finance,70000000000000000000000000000,84,6,13,12,2025-01-15
";
        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(
            err,
            CsvLoadError::InvalidQuote {
                row: 1,
                source: QuoteError::OutOfRange { .. }
            }
        ));
    }

    #[test]
    fn test_header_only_gives_no_requests() {
        let csv = "quote_type,vehicle_price,term_months,annual_interest,sales_tax_percent,payments_per_year,start_date\n";

        assert!(load_from_str(csv).unwrap().is_empty());
    }
}
