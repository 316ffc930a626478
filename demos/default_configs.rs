use pricing_lib::{OptionSide, PricingConfig, PricingEngine, PricingInputs};

fn main() {
    let inputs = match PricingInputs::new(100.0, 100.0, 63.0, 20.0, 5.0) {
        Ok(inputs) => inputs,
        Err(e) => {
            println!("❌ Invalid inputs: {}", e);
            return;
        }
    };

    println!("Pricing-lib Configuration Examples\n");

    // 1. Built-in defaults
    println!("1. Default Configuration (calendar days):");
    let default_config = PricingConfig::default();
    println!(
        "   Days per year: {}",
        default_config.conventions.days_per_year
    );
    println!(
        "   Percent scale: {}",
        default_config.conventions.percent_scale
    );
    println!("   Decimals: {}", default_config.display.decimals);
    match PricingEngine::new(default_config) {
        Ok(engine) => print_quote(&engine, &inputs),
        Err(e) => println!("❌ Invalid config: {}", e),
    }

    // 2. Loaded from TOML
    println!("\n2. Configuration from demos/pricing.toml (trading days):");
    match PricingConfig::from_file("demos/pricing.toml") {
        Ok(config) => {
            println!("   Days per year: {}", config.conventions.days_per_year);
            println!("   Decimals: {}", config.display.decimals);
            match PricingEngine::new(config) {
                Ok(engine) => print_quote(&engine, &inputs),
                Err(e) => println!("❌ Invalid config: {}", e),
            }
        }
        Err(e) => {
            println!("❌ Failed to load config: {:#}", e);
        }
    }

    // 3. Invalid configuration is rejected up front
    println!("\n3. Invalid configuration:");
    match PricingConfig::from_toml_str("[conventions]\ndays_per_year = 0.0\n") {
        Ok(_) => println!("   unexpectedly accepted"),
        Err(e) => println!("✅ Rejected: {:#}", e),
    }
}

fn print_quote(engine: &PricingEngine, inputs: &PricingInputs) {
    let quote = engine.price(inputs, OptionSide::Call);
    for line in quote.lines(&engine.config().display) {
        println!("   {}", line);
    }
}
