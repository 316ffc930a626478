//! Human-readable rendering of quotes.
//!
//! Undefined outcomes render as an explicit "unavailable" message; a NaN or
//! placeholder number is never printed in place of a price.

use crate::error::Outcome;
use crate::models::bachelier::Bachelier;
use crate::models::bs::BlackScholes;
use crate::models::traits::PricingModel;
use crate::pricing::config::DisplayConfig;
use crate::pricing::types::{OptionSide, Quote};

/// Format a price with the configured currency symbol and precision.
///
/// The sign is taken from the rounded value, so amounts that round to zero
/// never print as a negative zero.
pub fn format_price(price: f64, display: &DisplayConfig) -> String {
    let digits = format!("{:.*}", display.decimals, price.abs());
    let rounds_to_zero = digits.chars().all(|c| c == '0' || c == '.');
    let sign = if price < 0.0 && !rounds_to_zero { "-" } else { "" };
    format!("{sign}{}{digits}", display.currency_symbol)
}

/// One line describing a model's price for a side.
///
/// ```
/// use pricing_lib::pricing::report::format_outcome;
/// use pricing_lib::{DisplayConfig, OptionSide};
///
/// let line = format_outcome("Black-Scholes", OptionSide::Call, &Ok(2.4934), &DisplayConfig::default());
/// assert_eq!(line, "Black-Scholes Call option price is: $2.49");
/// ```
pub fn format_outcome(
    model_label: &str,
    side: OptionSide,
    outcome: &Outcome,
    display: &DisplayConfig,
) -> String {
    match outcome {
        Ok(price) => format!(
            "{model_label} {side} option price is: {}",
            format_price(*price, display)
        ),
        Err(err) => {
            format!("{model_label} {side} option price is unavailable for these inputs ({err})")
        }
    }
}

impl Quote {
    /// Report lines, Black-Scholes first and Bachelier second.
    pub fn lines(&self, display: &DisplayConfig) -> [String; 2] {
        [
            format_outcome(BlackScholes.name(), self.side, &self.black_scholes, display),
            format_outcome(Bachelier.name(), self.side, &self.bachelier, display),
        ]
    }
}
