use std::fmt;
use std::str::FromStr;

use crate::error::{Outcome, PricingError};
use crate::pricing::config::Conventions;

/// Contract side selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionSide {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionSide::Call => f.write_str("Call"),
            OptionSide::Put => f.write_str("Put"),
        }
    }
}

impl FromStr for OptionSide {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionSide::Call),
            "put" | "p" => Ok(OptionSide::Put),
            other => Err(PricingError::InvalidInput {
                message: format!("unknown option side: {other}"),
            }),
        }
    }
}

/// Raw market inputs in the units a user enters them.
///
/// Days and percentages are converted to year fractions and decimals by
/// [`PricingInputs::to_model_inputs`]. Values are consumed immutably; a fresh
/// value is built for every request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInputs {
    /// Spot price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Calendar days until expiry
    pub days_to_expiry: f64,
    /// Annualized volatility in percent (20.0 = 20%)
    pub volatility_pct: f64,
    /// Risk-free rate in percent (5.0 = 5%)
    pub rate_pct: f64,
}

impl PricingInputs {
    /// Build a validated input set.
    ///
    /// # Errors
    /// [`PricingError::InvalidInput`] when any field is negative, NaN or infinite.
    pub fn new(
        spot: f64,
        strike: f64,
        days_to_expiry: f64,
        volatility_pct: f64,
        rate_pct: f64,
    ) -> Result<Self, PricingError> {
        let inputs = Self {
            spot,
            strike,
            days_to_expiry,
            volatility_pct,
            rate_pct,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Check every field is finite and non-negative.
    pub fn validate(&self) -> Result<(), PricingError> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("days_to_expiry", self.days_to_expiry),
            ("volatility_pct", self.volatility_pct),
            ("rate_pct", self.rate_pct),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(PricingError::InvalidInput {
                    message: format!("{name} must be non-negative and finite, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Convert to the decimal, annualized form the formulas consume.
    pub fn to_model_inputs(&self, conventions: &Conventions) -> ModelInputs {
        ModelInputs {
            spot: self.spot,
            strike: self.strike,
            t: self.days_to_expiry / conventions.days_per_year,
            vol: self.volatility_pct / conventions.percent_scale,
            rate: self.rate_pct / conventions.percent_scale,
        }
    }
}

/// Inputs in model units: year fraction, decimal volatility and decimal rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelInputs {
    pub spot: f64,
    pub strike: f64,
    /// Time to expiry in years
    pub t: f64,
    /// Volatility as a decimal (0.20 = 20%)
    pub vol: f64,
    /// Risk-free rate as a decimal (0.05 = 5%)
    pub rate: f64,
}

/// Both model prices for one side of one input set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Quote {
    pub side: OptionSide,
    pub black_scholes: Outcome,
    pub bachelier: Outcome,
}

impl Quote {
    /// True when both models produced a price.
    pub fn is_complete(&self) -> bool {
        self.black_scholes.is_ok() && self.bachelier.is_ok()
    }
}
