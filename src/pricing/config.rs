#[cfg(feature = "serde")]
use anyhow::{Context, Result};

use crate::error::PricingError;

/// Unit conventions used to turn raw user inputs into model inputs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conventions {
    /// Day count used to annualize `days_to_expiry`
    #[cfg_attr(feature = "serde", serde(default = "default_days_per_year"))]
    pub days_per_year: f64,
    /// Divisor applied to percentage inputs (volatility and rate)
    #[cfg_attr(feature = "serde", serde(default = "default_percent_scale"))]
    pub percent_scale: f64,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            days_per_year: default_days_per_year(),
            percent_scale: default_percent_scale(),
        }
    }
}

/// Formatting of prices for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_currency_symbol"))]
    pub currency_symbol: String,
    /// Decimal places shown for prices
    #[cfg_attr(feature = "serde", serde(default = "default_decimals"))]
    pub decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            decimals: default_decimals(),
        }
    }
}

/// Top-level configuration for a [`PricingEngine`](crate::PricingEngine).
///
/// Every field has a default, so an empty TOML document is a valid config:
///
/// ```toml
/// [conventions]
/// days_per_year = 365.0
/// percent_scale = 100.0
///
/// [display]
/// currency_symbol = "$"
/// decimals = 2
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub conventions: Conventions,
    #[cfg_attr(feature = "serde", serde(default))]
    pub display: DisplayConfig,
}

impl PricingConfig {
    /// Reject conventions that would divide by zero or flip signs.
    pub fn validate(&self) -> Result<(), PricingError> {
        let Conventions {
            days_per_year,
            percent_scale,
        } = self.conventions;
        if !days_per_year.is_finite() || days_per_year <= 0.0 {
            return Err(PricingError::InvalidInput {
                message: format!("days_per_year must be positive, got {days_per_year}"),
            });
        }
        if !percent_scale.is_finite() || percent_scale <= 0.0 {
            return Err(PricingError::InvalidInput {
                message: format!("percent_scale must be positive, got {percent_scale}"),
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: PricingConfig =
            toml::from_str(source).context("failed to parse pricing config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("invalid config in {}", path.display()))
    }
}

fn default_days_per_year() -> f64 {
    365.0
}

fn default_percent_scale() -> f64 {
    100.0
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_decimals() -> usize {
    2
}
