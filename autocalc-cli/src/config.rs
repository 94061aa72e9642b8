//! Default quote inputs, optionally loaded from a TOML file.
//!
//! Every key is optional; anything left out keeps the built-in default.
//!
//! ```toml
//! [finance]
//! vehicle_price = 38500
//! term_months = 72
//! annual_interest = 4.9
//!
//! [lease]
//! residual_percent = 55
//! payments_per_year = 26
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub finance: FinanceDefaults,
    pub lease: LeaseDefaults,
}

/// Values used for any finance input that is not supplied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinanceDefaults {
    pub vehicle_price: Decimal,
    pub down_payment: Decimal,
    pub trade_in_value: Decimal,
    pub amount_owed: Decimal,
    pub rebates: Decimal,
    pub all_other_fees: Decimal,
    pub term_months: u32,
    pub annual_interest: Decimal,
    pub sales_tax_percent: Decimal,
    pub payments_per_year: u32,
}

impl Default for FinanceDefaults {
    fn default() -> Self {
        Self {
            vehicle_price: Decimal::from(44_000),
            down_payment: Decimal::ZERO,
            trade_in_value: Decimal::ZERO,
            amount_owed: Decimal::ZERO,
            rebates: Decimal::ZERO,
            all_other_fees: Decimal::ZERO,
            term_months: 84,
            annual_interest: Decimal::from(6),
            sales_tax_percent: Decimal::from(13),
            payments_per_year: 12,
        }
    }
}

/// Values used for any lease input that is not supplied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeaseDefaults {
    pub vehicle_price: Decimal,
    pub down_payment: Decimal,
    pub trade_in_value: Decimal,
    pub amount_owed: Decimal,
    pub rebates: Decimal,
    pub all_other_fees: Decimal,
    pub residual_percent: Decimal,
    pub term_months: u32,
    pub annual_interest: Decimal,
    pub sales_tax_percent: Decimal,
    pub payments_per_year: u32,
}

impl Default for LeaseDefaults {
    fn default() -> Self {
        Self {
            vehicle_price: Decimal::from(44_000),
            down_payment: Decimal::ZERO,
            trade_in_value: Decimal::ZERO,
            amount_owed: Decimal::ZERO,
            rebates: Decimal::ZERO,
            all_other_fees: Decimal::ZERO,
            residual_percent: Decimal::from(48),
            term_months: 48,
            // 6.59%
            annual_interest: Decimal::new(659, 2),
            sales_tax_percent: Decimal::from(13),
            payments_per_year: 12,
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(
        input: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads configuration from `path`. A missing file is an error; callers
    /// that want the built-in defaults should use [`AppConfig::default`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Loads `path` when given, otherwise returns the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
