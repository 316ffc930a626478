//! # Pricing-Lib: Closed-Form European Option Pricing
//!
//! `pricing-lib` prices European calls and puts under two analytic models from five
//! scalar market inputs: spot, strike, days to expiry, volatility (percent) and
//! risk-free rate (percent).
//!
//! ## Core Features
//!
//! - **Black-Scholes**: lognormal underlying, put derived through put-call parity
//! - **Bachelier**: arithmetic underlying with a spot-scaled volatility term
//! - **Typed undefined results**: zero volatility, zero rate, zero time or a
//!   non-positive price yield a [`PricingError`] instead of NaN or infinity
//! - **Configurable conventions**: day count and percent scaling, loadable from TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use pricing_lib::{price, OptionSide, PricingInputs};
//!
//! let inputs = PricingInputs::new(100.0, 100.0, 30.0, 20.0, 5.0)?;
//! let quote = price(&inputs, OptionSide::Call);
//!
//! let bs = quote.black_scholes.as_ref().expect("defined for these inputs");
//! assert!((bs - 2.4934).abs() < 1e-3);
//! # Ok::<(), pricing_lib::PricingError>(())
//! ```
//!
//! ## Undefined Prices
//!
//! ```rust
//! use pricing_lib::{price, OptionSide, PricingError, PricingInputs};
//!
//! // A zero rate leaves the Bachelier normalization undefined
//! let inputs = PricingInputs::new(50.0, 60.0, 365.0, 30.0, 0.0)?;
//! let quote = price(&inputs, OptionSide::Put);
//! assert!(quote.black_scholes.is_ok());
//! assert!(matches!(quote.bachelier, Err(PricingError::DivisionByZero { .. })));
//! # Ok::<(), pricing_lib::PricingError>(())
//! ```

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod pricing;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{Outcome, PricingError};

pub use models::{bachelier::Bachelier, bs::BlackScholes, traits::PricingModel};

pub use pricing::{
    config::{Conventions, DisplayConfig, PricingConfig},
    engine::PricingEngine,
    types::{ModelInputs, OptionSide, PricingInputs, Quote},
};

/// Price one side under both models with default conventions.
///
/// Equivalent to `PricingEngine::default().price(inputs, side)`: days are
/// divided by 365 and percentages by 100.
///
/// # Example
///
/// ```rust
/// use pricing_lib::{price, DisplayConfig, OptionSide, PricingInputs};
///
/// let inputs = PricingInputs::new(100.0, 100.0, 30.0, 20.0, 5.0).unwrap();
/// let quote = price(&inputs, OptionSide::Put);
///
/// for line in quote.lines(&DisplayConfig::default()) {
///     println!("{line}");
/// }
/// ```
pub fn price(inputs: &PricingInputs, side: OptionSide) -> Quote {
    PricingEngine::default().price(inputs, side)
}

/// Price many input sets for one side with default conventions.
pub fn price_batch(inputs: &[PricingInputs], side: OptionSide) -> Vec<Quote> {
    PricingEngine::default().price_batch(inputs, side)
}
