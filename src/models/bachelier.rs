//! Bachelier (arithmetic) pricing with a spot-scaled volatility.
//!
//! The volatility handed to the formulas is not the decimal volatility itself but
//! that volatility multiplied by spot, so the model behaves like a normal model
//! whose absolute volatility grows with the underlying level:
//!
//! ```text
//! F  = S·e^(r·T)
//! Q  = √( σₑ² / (2r) · (e^(2rT) − 1) )
//! dN = (F − K) / Q
//! C  = e^(−rT)·(F − K)·Φ(dN) + e^(−rT)·Q·φ(dN)
//! ```
//!
//! The call path uses `σₑ = σ·S`. The put path prices a call at `σₑ = σ·S·S`
//! and converts it with `P = C − S + K·e^(−rT)`, so call and put are **not**
//! parity-consistent with each other. That asymmetry is kept intentionally
//! visible through [`effective_vol`] and [`put_effective_vol`].

use tracing::trace;

use crate::error::{ensure_finite, Outcome, PricingError};
use crate::models::traits::PricingModel;
use crate::models::utils::{norm_cdf, norm_pdf};
use crate::pricing::types::ModelInputs;

/// Volatility passed to the call formula: σ·S.
pub fn effective_vol(inputs: &ModelInputs) -> f64 {
    inputs.vol * inputs.spot
}

/// Volatility passed to the call formula on the put path: σ·S·S.
pub fn put_effective_vol(inputs: &ModelInputs) -> f64 {
    effective_vol(inputs) * inputs.spot
}

/// Forward value F = S·e^(r·T).
pub fn forward(spot: f64, rate: f64, t: f64) -> f64 {
    spot * (rate * t).exp()
}

/// Volatility normalization Q = √( σₑ²/(2r) · (e^(2rT) − 1) ).
///
/// `e^(2rT) − 1` is evaluated with `exp_m1` so small positive rates keep their
/// precision instead of cancelling to zero.
///
/// # Errors
/// [`PricingError::DivisionByZero`] when `rate` is zero or when `Q` itself is
/// zero (zero effective volatility or zero time).
pub fn normalization(effective_vol: f64, rate: f64, t: f64) -> Outcome {
    if rate == 0.0 {
        return Err(PricingError::DivisionByZero { term: "2·rate" });
    }
    let growth = (2.0 * rate * t).exp_m1() / (2.0 * rate);
    let q = ensure_finite((effective_vol.powi(2) * growth).sqrt(), "Q")?;
    if q == 0.0 {
        return Err(PricingError::DivisionByZero { term: "Q" });
    }
    Ok(q)
}

/// Q and dN together, sharing one normalization.
fn moneyness_terms(
    effective_vol: f64,
    forward: f64,
    strike: f64,
    rate: f64,
    t: f64,
) -> Result<(f64, f64), PricingError> {
    let q = normalization(effective_vol, rate, t)?;
    let dn = ensure_finite((forward - strike) / q, "dN")?;
    Ok((q, dn))
}

/// Normalized moneyness dN = (F − K) / Q.
pub fn d_n(effective_vol: f64, spot: f64, strike: f64, rate: f64, t: f64) -> Outcome {
    moneyness_terms(effective_vol, forward(spot, rate, t), strike, rate, t).map(|(_, dn)| dn)
}

/// Call price for an explicit effective volatility.
pub fn call_price(effective_vol: f64, spot: f64, strike: f64, rate: f64, t: f64) -> Outcome {
    let fwd = forward(spot, rate, t);
    let (q, dn) = moneyness_terms(effective_vol, fwd, strike, rate, t)?;
    trace!(forward = fwd, q, dn, "bachelier terms");

    let discount = (-rate * t).exp();
    let call = discount * (fwd - strike) * norm_cdf(dn) + discount * q * norm_pdf(dn);
    ensure_finite(call, "bachelier call")
}

/// Put price: a call at [`put_effective_vol`], then `C − S + K·e^(−rT)`.
pub fn put_price(inputs: &ModelInputs) -> Outcome {
    let ModelInputs {
        spot,
        strike,
        t,
        rate,
        ..
    } = *inputs;
    let call = call_price(put_effective_vol(inputs), spot, strike, rate, t)?;
    let put = call - spot + (-rate * t).exp() * strike;
    ensure_finite(put, "bachelier put")
}

/// Bachelier (normal) model with spot-scaled volatility
#[derive(Debug, Clone, Copy, Default)]
pub struct Bachelier;

impl PricingModel for Bachelier {
    fn name(&self) -> &'static str {
        "Bachelier"
    }

    fn call_price(&self, inputs: &ModelInputs) -> Outcome {
        call_price(
            effective_vol(inputs),
            inputs.spot,
            inputs.strike,
            inputs.rate,
            inputs.t,
        )
    }

    fn put_price(&self, inputs: &ModelInputs) -> Outcome {
        put_price(inputs)
    }
}
