//! Property-based tests using proptest.
//!
//! These check invariants of both models across random inputs rather than
//! fixed scenarios.

use proptest::prelude::*;
use pricing_lib::models::bachelier::{self, put_effective_vol};
use pricing_lib::models::bs;
use pricing_lib::{price, Bachelier, ModelInputs, OptionSide, PricingInputs, PricingModel};

/// Non-negative raw input that is exactly zero a fair share of the time.
fn raw_value(max: f64) -> impl Strategy<Value = f64> {
    prop_oneof![1 => Just(0.0), 4 => 0.0..max]
}

proptest! {
    /// Black-Scholes call minus put equals S − K·e^(−rT) for all well-defined inputs.
    #[test]
    fn black_scholes_put_call_parity(
        spot in 1.0_f64..500.0,
        strike in 1.0_f64..500.0,
        days in 1.0_f64..1000.0,
        vol_pct in 1.0_f64..150.0,
        rate_pct in 0.0_f64..10.0,
    ) {
        let inputs = PricingInputs::new(spot, strike, days, vol_pct, rate_pct).unwrap();
        let call = price(&inputs, OptionSide::Call).black_scholes.unwrap();
        let put = price(&inputs, OptionSide::Put).black_scholes.unwrap();

        let t = days / 365.0;
        let rate = rate_pct / 100.0;
        let expected = spot - strike * (-rate * t).exp();
        let scale = spot.max(strike);
        prop_assert!(
            (call - put - expected).abs() <= 1e-9 * scale,
            "C-P={} expected={}", call - put, expected
        );
    }

    /// The Black-Scholes call never decreases as spot rises.
    #[test]
    fn black_scholes_call_monotone_in_spot(
        spot in 1.0_f64..300.0,
        bump in 0.0_f64..50.0,
        strike in 1.0_f64..300.0,
        t in 0.01_f64..3.0,
        vol in 0.01_f64..1.0,
        rate in 0.0_f64..0.1,
    ) {
        let low = ModelInputs { spot, strike, t, vol, rate };
        let high = ModelInputs { spot: spot + bump, ..low };
        let c_low = bs::call_price(&low).unwrap();
        let c_high = bs::call_price(&high).unwrap();
        prop_assert!(c_high >= c_low - 1e-9, "C({})={} > C({})={}", spot, c_low, spot + bump, c_high);
    }

    /// A quote never carries NaN or infinity: each slot is a finite price or an error.
    #[test]
    fn quotes_are_finite_or_undefined(
        spot in raw_value(1000.0),
        strike in raw_value(1000.0),
        days in raw_value(2000.0),
        vol_pct in raw_value(200.0),
        rate_pct in raw_value(20.0),
    ) {
        let inputs = PricingInputs::new(spot, strike, days, vol_pct, rate_pct).unwrap();
        for side in [OptionSide::Call, OptionSide::Put] {
            let quote = price(&inputs, side);
            for outcome in [&quote.black_scholes, &quote.bachelier] {
                if let Ok(value) = outcome {
                    prop_assert!(value.is_finite(), "{:?} produced {}", side, value);
                }
            }
        }
    }

    /// Zero volatility or zero time is always undefined in both models.
    #[test]
    fn zero_vol_or_time_always_undefined(
        spot in 0.0_f64..500.0,
        strike in 0.0_f64..500.0,
        days in 0.0_f64..1000.0,
        vol_pct in 0.0_f64..100.0,
        rate_pct in 0.0_f64..10.0,
        zero_vol in any::<bool>(),
    ) {
        let (days, vol_pct) = if zero_vol { (days, 0.0) } else { (0.0, vol_pct) };
        let inputs = PricingInputs::new(spot, strike, days, vol_pct, rate_pct).unwrap();
        let quote = price(&inputs, OptionSide::Call);
        prop_assert!(quote.black_scholes.is_err());
        prop_assert!(quote.bachelier.is_err());
    }

    /// The Bachelier put equals parity applied to a call priced at σ·S².
    #[test]
    fn bachelier_put_uses_rescaled_call(
        spot in 0.5_f64..20.0,
        strike in 0.5_f64..20.0,
        t in 0.05_f64..2.0,
        vol in 0.05_f64..0.8,
        rate in 0.001_f64..0.1,
    ) {
        let inputs = ModelInputs { spot, strike, t, vol, rate };
        let put = Bachelier.put_price(&inputs).unwrap();
        let call = bachelier::call_price(put_effective_vol(&inputs), spot, strike, rate, t).unwrap();
        prop_assert_eq!(put, call - spot + (-rate * t).exp() * strike);
    }

    /// The Bachelier call is never meaningfully negative.
    #[test]
    fn bachelier_call_non_negative(
        spot in 1.0_f64..500.0,
        strike in 0.0_f64..500.0,
        t in 0.01_f64..3.0,
        vol in 0.01_f64..1.0,
        rate in 0.001_f64..0.1,
    ) {
        let inputs = ModelInputs { spot, strike, t, vol, rate };
        let call = Bachelier.call_price(&inputs).unwrap();
        prop_assert!(call >= -1e-9, "call={}", call);
    }
}
