pub mod bachelier;
pub mod bs;

/// Common traits implemented by every pricing model
pub mod traits {
    use crate::error::Outcome;
    use crate::pricing::types::{ModelInputs, OptionSide};

    /// Closed-form European option model
    pub trait PricingModel: Send + Sync {
        /// Label used in reports and logs
        fn name(&self) -> &'static str;

        fn call_price(&self, inputs: &ModelInputs) -> Outcome;

        fn put_price(&self, inputs: &ModelInputs) -> Outcome;

        /// Dispatch on the contract side
        fn price(&self, side: OptionSide, inputs: &ModelInputs) -> Outcome {
            match side {
                OptionSide::Call => self.call_price(inputs),
                OptionSide::Put => self.put_price(inputs),
            }
        }
    }
}

/// Normal distribution helpers shared by the models
pub mod utils {
    use std::sync::OnceLock;

    use statrs::distribution::{Continuous, ContinuousCDF, Normal};

    fn standard_normal() -> &'static Normal {
        static STANDARD: OnceLock<Normal> = OnceLock::new();
        STANDARD.get_or_init(Normal::standard)
    }

    /// Standard normal cumulative distribution function Φ(x)
    pub fn norm_cdf(x: f64) -> f64 {
        standard_normal().cdf(x)
    }

    /// Standard normal probability density function φ(x)
    pub fn norm_pdf(x: f64) -> f64 {
        standard_normal().pdf(x)
    }

}
