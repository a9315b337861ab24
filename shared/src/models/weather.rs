//! Weather data models

use serde::{Deserialize, Serialize};

/// Current conditions snapshot consumed by the calculators
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub rainfall_mm: f64,
}

impl WeatherReading {
    pub fn new(temperature_c: f64, humidity_pct: f64, rainfall_mm: f64) -> Self {
        Self {
            temperature_c,
            humidity_pct,
            rainfall_mm,
        }
    }
}

/// Where a weather reading came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherSource {
    OpenWeatherMap,
    Simulated,
}

impl WeatherSource {
    pub fn is_simulated(&self) -> bool {
        matches!(self, WeatherSource::Simulated)
    }
}
