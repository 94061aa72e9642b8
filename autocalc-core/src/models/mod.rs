mod finance_quote;
mod lease_quote;
mod quote_error;
mod quote_type;
mod saved_quote;

pub use finance_quote::{FinanceQuote, FinanceResult};
pub use lease_quote::{LeaseQuote, LeaseResult};
pub use quote_error::{MAX_AMOUNT, MAX_PERCENT, QuoteError};
pub use quote_type::{PaymentFrequency, QuoteType};
pub use saved_quote::SavedQuote;
