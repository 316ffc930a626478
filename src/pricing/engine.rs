use tracing::debug;

use crate::error::{Outcome, PricingError};
use crate::models::bachelier::Bachelier;
use crate::models::bs::BlackScholes;
use crate::models::traits::PricingModel;
use crate::pricing::config::PricingConfig;
use crate::pricing::types::{ModelInputs, OptionSide, PricingInputs, Quote};

/// Stateless dispatcher that prices one side under both models.
///
/// The engine only holds configuration; every call is independent, so a shared
/// reference can be used from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Build an engine after checking the config's conventions.
    ///
    /// # Errors
    /// [`PricingError::InvalidInput`] when `days_per_year` or `percent_scale` is
    /// not strictly positive and finite.
    pub fn new(config: PricingConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Price `side` under Black-Scholes and Bachelier.
    ///
    /// Inputs that fail validation yield the same error in both slots of the
    /// returned [`Quote`]; formula-level failures are reported per model.
    pub fn price(&self, inputs: &PricingInputs, side: OptionSide) -> Quote {
        if let Err(err) = inputs.validate() {
            debug!(%side, error = %err, "rejected pricing inputs");
            return Quote {
                side,
                black_scholes: Err(err.clone()),
                bachelier: Err(err),
            };
        }

        let model_inputs = inputs.to_model_inputs(&self.config.conventions);
        let black_scholes = evaluate(&BlackScholes, side, &model_inputs);
        let bachelier = evaluate(&Bachelier, side, &model_inputs);

        debug!(
            %side,
            spot = inputs.spot,
            strike = inputs.strike,
            black_scholes = ?black_scholes,
            bachelier = ?bachelier,
            "priced option"
        );

        Quote {
            side,
            black_scholes,
            bachelier,
        }
    }

    /// Price many input sets for the same side, preserving input order.
    pub fn price_batch(&self, inputs: &[PricingInputs], side: OptionSide) -> Vec<Quote> {
        let mut quotes = Vec::with_capacity(inputs.len());
        for row in inputs {
            quotes.push(self.price(row, side));
        }
        quotes
    }
}

fn evaluate(
    model: &dyn PricingModel,
    side: OptionSide,
    inputs: &ModelInputs,
) -> Outcome {
    let outcome = model.price(side, inputs);
    if let Err(err) = &outcome {
        debug!(model = model.name(), %side, error = %err, "price undefined");
    }
    outcome
}
