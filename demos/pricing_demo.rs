// demos/pricing_demo.rs

//! Demonstration of Black-Scholes and Bachelier pricing
//!
//! This example shows how to:
//! 1. Build validated pricing inputs from raw user units
//! 2. Price calls and puts under both models
//! 3. Render quotes, including undefined prices
//! 4. Batch-price a small strike ladder
//!
//! Run with `RUST_LOG=pricing_lib=debug` to see per-quote diagnostics.

use anyhow::Result;
use pricing_lib::{price, DisplayConfig, OptionSide, PricingEngine, PricingInputs};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("Option Pricing Demo");
    println!("===================");

    let display = DisplayConfig::default();

    println!("\nStep 1: 30-day at-the-money option (S=100, K=100, vol=20%, r=5%)");
    let atm = PricingInputs::new(100.0, 100.0, 30.0, 20.0, 5.0)?;
    for side in [OptionSide::Call, OptionSide::Put] {
        for line in price(&atm, side).lines(&display) {
            println!("  {line}");
        }
    }

    println!("\nStep 2: one-year out-of-the-money option (S=50, K=60, vol=30%, r=1%)");
    let otm = PricingInputs::new(50.0, 60.0, 365.0, 30.0, 1.0)?;
    for side in [OptionSide::Call, OptionSide::Put] {
        for line in price(&otm, side).lines(&display) {
            println!("  {line}");
        }
    }

    println!("\nStep 3: degenerate inputs (zero rate, zero volatility)");
    let zero_rate = PricingInputs::new(100.0, 95.0, 60.0, 20.0, 0.0)?;
    let zero_vol = PricingInputs::new(100.0, 95.0, 60.0, 0.0, 5.0)?;
    for inputs in [zero_rate, zero_vol] {
        for line in price(&inputs, OptionSide::Call).lines(&display) {
            println!("  {line}");
        }
    }

    println!("\nStep 4: batch pricing a strike ladder");
    let ladder: Vec<PricingInputs> = [80.0, 90.0, 100.0, 110.0, 120.0]
        .into_iter()
        .map(|strike| PricingInputs::new(100.0, strike, 90.0, 25.0, 3.0))
        .collect::<Result<_, _>>()?;

    let engine = PricingEngine::default();
    let quotes = engine.price_batch(&ladder, OptionSide::Call);

    println!("{:<8} {:<16} {:<16}", "Strike", "Black-Scholes", "Bachelier");
    println!("{}", "-".repeat(42));
    for (inputs, quote) in ladder.iter().zip(&quotes) {
        let render = |outcome: &pricing_lib::Outcome| match outcome {
            Ok(value) => format!("{value:.4}"),
            Err(_) => "n/a".to_string(),
        };
        println!(
            "{:<8.0} {:<16} {:<16}",
            inputs.strike,
            render(&quote.black_scholes),
            render(&quote.bachelier)
        );
    }

    Ok(())
}
