use serde::Deserialize;
use pricing_lib::PricingInputs;

/// CSV row of a reference pricing scenario.
///
/// Expected prices were produced by an independent double-precision evaluation of
/// the same formulas; an empty cell means the price is undefined for that row.
#[derive(Debug, Deserialize)]
pub struct ScenarioRow {
    pub name: String,
    pub spot: f64,
    pub strike: f64,
    pub days: f64,
    pub volatility_pct: f64,
    pub rate_pct: f64,
    pub bs_call: Option<f64>,
    pub bs_put: Option<f64>,
    pub bachelier_call: Option<f64>,
    pub bachelier_put: Option<f64>,
}

impl ScenarioRow {
    pub fn inputs(&self) -> PricingInputs {
        PricingInputs::new(
            self.spot,
            self.strike,
            self.days,
            self.volatility_pct,
            self.rate_pct,
        )
        .expect("scenario inputs must be valid")
    }
}

/// Load reference scenarios from a CSV file
pub fn load_scenarios(file_path: &str) -> Result<Vec<ScenarioRow>, Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_path(file_path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: ScenarioRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Load the bundled scenario fixture
pub fn default_scenarios() -> Vec<ScenarioRow> {
    load_scenarios("tests/data/scenarios.csv").expect("Failed to load scenario fixture")
}

/// Relative closeness with an absolute floor for values near zero
pub fn assert_close(actual: f64, expected: f64, rel_tol: f64, context: &str) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= rel_tol * scale,
        "{context}: expected {expected}, got {actual}"
    );
}
