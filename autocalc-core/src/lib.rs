//! Payment calculations for vehicle finance and lease quotes.
//!
//! [`calculations::FinanceCalculator`] and [`calculations::LeaseCalculator`]
//! turn a quote into a fully resolved, unrounded result. Saved results are
//! kept in a volatile [`store::QuoteStore`].

pub mod calculations;
pub mod models;
pub mod store;

pub use calculations::{FinanceCalculator, LeaseCalculator};
pub use models::*;
pub use store::{QuoteStore, SharedQuoteStore};
