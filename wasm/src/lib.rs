//! WebAssembly module for the Prawn Farm Management Platform
//!
//! Provides client-side computation for:
//! - Feeding schedule calculation
//! - Pond performance predictions
//! - Biomass estimation
//! - Offline input validation

use wasm_bindgen::prelude::*;

use shared::prediction::{GrowthRate, PondConditions, RiskLevel};

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Calculate a stage-appropriate feeding schedule, returned as JSON
#[wasm_bindgen]
pub fn calculate_feeding_schedule(
    age_days: i32,
    pond_size_hectares: f64,
    stocking_density_per_acre: f64,
) -> Result<String, JsValue> {
    validate_prawn_age(age_days).map_err(JsValue::from_str)?;
    validate_pond_size(pond_size_hectares).map_err(JsValue::from_str)?;
    validate_stocking_density(stocking_density_per_acre).map_err(JsValue::from_str)?;

    let schedule = shared::feeding::calculate_feeding_schedule(
        age_days,
        pond_size_hectares,
        stocking_density_per_acre,
    );
    serde_json::to_string(&schedule)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Predict pond performance for the given weather and pond, returned as JSON
#[wasm_bindgen]
pub fn calculate_pond_prediction(
    temperature_c: f64,
    humidity_pct: f64,
    rainfall_mm: f64,
    size_hectares: f64,
    consumption_rate_pct: f64,
) -> Result<String, JsValue> {
    validate_pond_size(size_hectares).map_err(JsValue::from_str)?;
    validate_consumption_rate(consumption_rate_pct).map_err(JsValue::from_str)?;

    let weather = WeatherReading::new(temperature_c, humidity_pct, rainfall_mm);
    let pond = PondConditions {
        size_hectares,
        consumption_rate_pct,
    };
    let prediction = shared::prediction::calculate_pond_prediction(&weather, &pond);
    serde_json::to_string(&prediction)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Estimate standing biomass in kilograms
#[wasm_bindgen]
pub fn estimate_biomass_kg(
    age_days: i32,
    pond_size_hectares: f64,
    stocking_density_per_acre: f64,
) -> Result<f64, JsValue> {
    validate_prawn_age(age_days).map_err(JsValue::from_str)?;
    validate_pond_size(pond_size_hectares).map_err(JsValue::from_str)?;
    validate_stocking_density(stocking_density_per_acre).map_err(JsValue::from_str)?;

    Ok(shared::feeding::estimate_biomass_kg(
        age_days,
        pond_size_hectares,
        stocking_density_per_acre,
    ))
}

/// Weather-based feeding guidance
#[wasm_bindgen]
pub fn feeding_recommendation(temperature_c: f64, humidity_pct: f64, rainfall_mm: f64) -> String {
    let weather = WeatherReading::new(temperature_c, humidity_pct, rainfall_mm);
    shared::weather_care::feeding_recommendation(&weather)
}

/// Display label for a serialized growth rate value
#[wasm_bindgen]
pub fn growth_rate_label(value: &str) -> String {
    match serde_json::from_value::<GrowthRate>(serde_json::Value::String(value.to_string())) {
        Ok(rate) => rate.to_string(),
        Err(_) => value.to_string(),
    }
}

/// Display label for a serialized risk level value
#[wasm_bindgen]
pub fn risk_level_label(value: &str) -> String {
    match serde_json::from_value::<RiskLevel>(serde_json::Value::String(value.to_string())) {
        Ok(level) => level.to_string(),
        Err(_) => value.to_string(),
    }
}
