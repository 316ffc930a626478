//! Error types for the pricing engine.
//!
//! Domain failures (zero denominators, logs of non-positive prices) are ordinary
//! outcomes of a pricing call, not faults. They are carried as values inside a
//! [`Quote`](crate::Quote) so the caller decides how to present them.

use thiserror::Error;

/// Result of a single model evaluation: a price, or the reason it is undefined.
pub type Outcome = std::result::Result<f64, PricingError>;

/// Reasons a price cannot be produced for a given set of inputs.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[non_exhaustive]
pub enum PricingError {
    /// A formula denominator is exactly zero (zero volatility, rate or time).
    #[error("division by zero in {term}")]
    DivisionByZero {
        /// Name of the term whose denominator vanished (e.g. "d1", "Q").
        term: &'static str,
    },

    /// The Black-Scholes log term `ln(spot / strike)` is outside its domain.
    #[error("log domain error: spot={spot}, strike={strike} must both be positive")]
    LogDomain { spot: f64, strike: f64 },

    /// An intermediate or final value overflowed or became NaN.
    #[error("non-finite value in {term}")]
    NonFinite { term: &'static str },

    /// Raw inputs or configuration violate their constraints.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl PricingError {
    /// True for the domain failures a formula can hit on valid inputs.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            PricingError::DivisionByZero { .. } | PricingError::LogDomain { .. }
        )
    }
}

/// Reject NaN or infinite intermediate values before they reach a caller.
pub(crate) fn ensure_finite(value: f64, term: &'static str) -> Outcome {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::NonFinite { term })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_term() {
        let err = PricingError::DivisionByZero { term: "d1" };
        assert_eq!(format!("{err}"), "division by zero in d1");

        let err = PricingError::LogDomain {
            spot: 0.0,
            strike: 100.0,
        };
        assert!(format!("{err}").contains("spot=0"));
    }

    #[test]
    fn domain_errors_are_classified() {
        assert!(PricingError::DivisionByZero { term: "Q" }.is_domain_error());
        assert!(PricingError::LogDomain {
            spot: 1.0,
            strike: 0.0
        }
        .is_domain_error());
        assert!(!PricingError::NonFinite { term: "call" }.is_domain_error());
        assert!(!PricingError::InvalidInput {
            message: "bad".into()
        }
        .is_domain_error());
    }

    #[test]
    fn ensure_finite_rejects_nan_and_inf() {
        assert_eq!(ensure_finite(1.5, "x"), Ok(1.5));
        assert_eq!(
            ensure_finite(f64::NAN, "x"),
            Err(PricingError::NonFinite { term: "x" })
        );
        assert!(ensure_finite(f64::INFINITY, "x").is_err());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PricingError>();
    }
}
