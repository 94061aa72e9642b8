//! Payment calculations for vehicle finance and lease quotes.
//!
//! The two calculators are independent: each takes its own quote type and
//! returns its own result type. Shared arithmetic lives in [`common`].

pub mod common;
pub mod finance;
pub mod lease;

pub use finance::FinanceCalculator;
pub use lease::LeaseCalculator;
