//! Loads the on-disk fixture and runs it through the batch flow, the same
//! path the `batch` subcommand takes.

use std::path::PathBuf;

use autocalc_cli::app::{self, Calculation, QuoteRequest};
use autocalc_cli::csv_loader;
use autocalc_cli::report;
use autocalc_core::calculations::common::round_half_up;
use autocalc_core::{QuoteType, SharedQuoteStore};
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_quotes.csv")
}

fn load_fixture() -> Vec<QuoteRequest> {
    csv_loader::load_from_file(&fixture_path()).expect("fixture file should load without error")
}

#[test]
fn test_load_fixture_file_succeeds() {
    let requests = load_fixture();

    let types: Vec<_> = requests.iter().map(QuoteRequest::quote_type).collect();
    assert_eq!(
        types,
        vec![QuoteType::Finance, QuoteType::Lease, QuoteType::Finance]
    );
}

#[test]
fn test_fixture_third_row_reductions() {
    let requests = load_fixture();
    let QuoteRequest::Finance(quote) = &requests[2] else {
        panic!("expected a finance request");
    };

    assert_eq!(quote.vehicle_price, dec!(32500));
    assert_eq!(quote.net_trade_in(), dec!(4500));
    assert_eq!(quote.rebates, dec!(750));
    assert_eq!(quote.payments_per_year, 26);
}

#[test]
fn test_batch_matches_reference_scenarios() {
    let store = SharedQuoteStore::new();
    let saved_at = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();

    let calculations = app::run_batch(load_fixture(), &store, saved_at);

    let Calculation::Finance { result, .. } = &calculations[0] else {
        panic!("expected a finance calculation");
    };
    assert_eq!(round_half_up(result.periodic_payment), dec!(726.34));
    assert_eq!(result.number_of_payments, 84);

    let Calculation::Lease { result, .. } = &calculations[1] else {
        panic!("expected a lease calculation");
    };
    assert_eq!(round_half_up(result.periodic_payment), dec!(717.44));
    assert_eq!(result.residual_value_including_tax, dec!(23865.60));

    assert_eq!(store.len(), 3);
}

#[test]
fn test_batch_history_after_removal() {
    let store = SharedQuoteStore::new();
    let saved_at = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
    app::run_batch(load_fixture(), &store, saved_at);

    let removed = app::remove_saved(&store, &[1, 9]);

    assert_eq!(removed, 1);
    let text = report::history(&store.snapshot());
    let titles: Vec<_> = text.lines().filter(|l| l.starts_with('[')).collect();
    assert_eq!(
        titles,
        vec![
            "[0] $44000 - 84 Month Financing Quote",
            "[1] $32500 - 60 Month Financing Quote",
        ]
    );
}
