use serde::{Deserialize, Serialize};

/// Which product a saved quote was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteType {
    Finance,
    Lease,
}

impl QuoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Lease => "lease",
        }
    }

    /// Case-insensitive parse of `finance` / `lease`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "finance" => Some(Self::Finance),
            "lease" => Some(Self::Lease),
            _ => None,
        }
    }

    /// Noun used in history titles ("84 Month Financing Quote").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Finance => "Financing",
            Self::Lease => "Leasing",
        }
    }
}

/// The payment frequencies offered when building a quote.
///
/// Quotes store the raw `payments_per_year` count, so any other value is
/// still accepted by the calculators; this type only names the usual ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Monthly,
    SemiMonthly,
    BiWeekly,
}

impl PaymentFrequency {
    pub fn all() -> &'static [PaymentFrequency] {
        &[
            PaymentFrequency::Monthly,
            PaymentFrequency::SemiMonthly,
            PaymentFrequency::BiWeekly,
        ]
    }

    pub fn payments_per_year(&self) -> u32 {
        match self {
            Self::Monthly => 12,
            Self::SemiMonthly => 24,
            Self::BiWeekly => 26,
        }
    }

    pub fn from_payments_per_year(count: u32) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.payments_per_year() == count)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::SemiMonthly => "Semi-Monthly",
            Self::BiWeekly => "Bi-Weekly",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn quote_type_parse_accepts_both_products() {
        assert_eq!(QuoteType::parse("finance"), Some(QuoteType::Finance));
        assert_eq!(QuoteType::parse(" Lease "), Some(QuoteType::Lease));
        assert_eq!(QuoteType::parse("rent"), None);
    }

    #[test]
    fn quote_type_as_str_parses_back() {
        for kind in [QuoteType::Finance, QuoteType::Lease] {
            assert_eq!(QuoteType::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn payment_frequency_maps_known_counts() {
        assert_eq!(
            PaymentFrequency::from_payments_per_year(12),
            Some(PaymentFrequency::Monthly)
        );
        assert_eq!(
            PaymentFrequency::from_payments_per_year(24),
            Some(PaymentFrequency::SemiMonthly)
        );
        assert_eq!(
            PaymentFrequency::from_payments_per_year(26),
            Some(PaymentFrequency::BiWeekly)
        );
    }

    #[test]
    fn payment_frequency_rejects_unusual_counts() {
        assert_eq!(PaymentFrequency::from_payments_per_year(52), None);
        assert_eq!(PaymentFrequency::from_payments_per_year(0), None);
    }
}
