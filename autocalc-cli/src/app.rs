//! Glue between parsed input, the calculators, the quote store and reports.

use autocalc_core::{
    FinanceCalculator, FinanceQuote, FinanceResult, LeaseCalculator, LeaseQuote, LeaseResult,
    QuoteType, SavedQuote, SharedQuoteStore,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::report::{FinanceReport, LeaseReport};

/// A quote waiting to be calculated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteRequest {
    Finance(FinanceQuote),
    Lease(LeaseQuote),
}

/// A quote together with its calculated result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Calculation {
    Finance {
        quote: FinanceQuote,
        result: FinanceResult,
    },
    Lease {
        quote: LeaseQuote,
        result: LeaseResult,
    },
}

impl QuoteRequest {
    pub fn quote_type(&self) -> QuoteType {
        match self {
            Self::Finance(_) => QuoteType::Finance,
            Self::Lease(_) => QuoteType::Lease,
        }
    }

    pub fn calculate(self) -> Calculation {
        match self {
            Self::Finance(quote) => {
                let result = FinanceCalculator::calculate(&quote);
                Calculation::Finance { quote, result }
            }
            Self::Lease(quote) => {
                let result = LeaseCalculator::calculate(&quote);
                Calculation::Lease { quote, result }
            }
        }
    }
}

impl Calculation {
    pub fn quote_type(&self) -> QuoteType {
        match self {
            Self::Finance { .. } => QuoteType::Finance,
            Self::Lease { .. } => QuoteType::Lease,
        }
    }

    /// History snapshot of this calculation.
    pub fn to_saved(
        &self,
        saved_at: DateTime<Utc>,
    ) -> SavedQuote {
        match self {
            Self::Finance { quote, result } => SavedQuote::from_finance(quote, result, saved_at),
            Self::Lease { quote, result } => SavedQuote::from_lease(quote, result, saved_at),
        }
    }

    /// Rendered result screen.
    pub fn report(&self) -> String {
        match self {
            Self::Finance { quote, result } => FinanceReport { quote, result }.to_string(),
            Self::Lease { quote, result } => LeaseReport { quote, result }.to_string(),
        }
    }
}

/// Calculates and saves a single quote, returning the calculation.
pub fn calculate_and_save(
    request: QuoteRequest,
    store: &SharedQuoteStore,
    saved_at: DateTime<Utc>,
) -> Calculation {
    let calculation = request.calculate();
    store.add(calculation.to_saved(saved_at));
    debug!(
        quote_type = calculation.quote_type().as_str(),
        saved = store.len(),
        "quote saved"
    );
    calculation
}

/// Calculates every request in order, saving each result to `store`.
pub fn run_batch(
    requests: Vec<QuoteRequest>,
    store: &SharedQuoteStore,
    saved_at: DateTime<Utc>,
) -> Vec<Calculation> {
    let calculations: Vec<_> = requests
        .into_iter()
        .map(|request| calculate_and_save(request, store, saved_at))
        .collect();
    info!(count = calculations.len(), "batch calculated");
    calculations
}

/// Removes history entries by index, in the order given. Indices refer to
/// the list as it is when each removal runs; out-of-range ones are skipped.
/// Returns how many entries were removed.
pub fn remove_saved(
    store: &SharedQuoteStore,
    indices: &[usize],
) -> usize {
    indices
        .iter()
        .filter(|&&index| store.remove(index).is_some())
        .count()
}
