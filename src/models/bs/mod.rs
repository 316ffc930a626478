// Black-Scholes pricing for European calls and puts. The put is derived from the
// call through put-call parity rather than an independent formula.

use tracing::trace;

use crate::error::{ensure_finite, Outcome, PricingError};
use crate::models::traits::PricingModel;
use crate::models::utils::norm_cdf;
use crate::pricing::types::ModelInputs;

/// Standardized distance d1 = [ln(S/K) + (r + σ²/2)·T] / (σ·√T).
///
/// # Errors
/// - [`PricingError::LogDomain`] when spot or strike is not strictly positive
/// - [`PricingError::DivisionByZero`] when σ·√T is exactly zero
pub fn d1(inputs: &ModelInputs) -> Outcome {
    let ModelInputs {
        spot,
        strike,
        t,
        vol,
        rate,
    } = *inputs;

    if !(spot > 0.0 && strike > 0.0) {
        return Err(PricingError::LogDomain { spot, strike });
    }

    let numerator = (spot / strike).ln() + (rate + 0.5 * vol.powi(2)) * t;
    let denominator = vol * t.sqrt();
    if denominator == 0.0 {
        return Err(PricingError::DivisionByZero { term: "d1" });
    }

    ensure_finite(numerator / denominator, "d1")
}

/// d2 = d1 − σ·√T
pub fn d2(d1: f64, inputs: &ModelInputs) -> f64 {
    d1 - inputs.vol * inputs.t.sqrt()
}

/// Strike discounted as K / e^(r·T).
///
/// Parity relations in this module use the divisor form so call and put share
/// the exact same discounted strike.
pub fn discounted_strike(inputs: &ModelInputs) -> f64 {
    inputs.strike / (inputs.rate * inputs.t).exp()
}

/// European call: S·Φ(d1) − K/e^(r·T)·Φ(d2)
pub fn call_price(inputs: &ModelInputs) -> Outcome {
    let d1 = d1(inputs)?;
    let d2 = d2(d1, inputs);
    trace!(d1, d2, "black-scholes terms");

    let call = inputs.spot * norm_cdf(d1) - discounted_strike(inputs) * norm_cdf(d2);
    ensure_finite(call, "black-scholes call")
}

/// European put via parity: C + K/e^(r·T) − S
pub fn put_price(inputs: &ModelInputs) -> Outcome {
    let call = call_price(inputs)?;
    let put = call + discounted_strike(inputs) - inputs.spot;
    ensure_finite(put, "black-scholes put")
}

/// Black-Scholes (lognormal) model
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl PricingModel for BlackScholes {
    fn name(&self) -> &'static str {
        "Black-Scholes"
    }

    fn call_price(&self, inputs: &ModelInputs) -> Outcome {
        call_price(inputs)
    }

    fn put_price(&self, inputs: &ModelInputs) -> Outcome {
        put_price(inputs)
    }
}
