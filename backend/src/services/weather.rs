//! Weather service for current pond-side conditions

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::config::WeatherConfig;
use crate::external::weather::WeatherClient;
use shared::models::{WeatherReading, WeatherSource};

/// Weather service for fetching current conditions
#[derive(Clone)]
pub struct WeatherService {
    weather_client: Option<WeatherClient>,
    city: String,
}

/// Current conditions with their provenance
#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub weather: WeatherReading,
    pub source: WeatherSource,
    pub simulated: bool,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherService {
    /// Create a new WeatherService from weather configuration
    ///
    /// Without an API key the service always serves simulated conditions.
    pub fn new(config: &WeatherConfig) -> Self {
        let weather_client = config
            .api_key
            .as_ref()
            .map(|key| WeatherClient::new(key.clone(), config.api_endpoint.clone()));

        Self {
            weather_client,
            city: config.city.clone(),
        }
    }

    /// Current conditions, live when the API is reachable, simulated otherwise
    pub async fn current_conditions(&self) -> CurrentConditions {
        if let Some(client) = &self.weather_client {
            match client.get_current_weather(&self.city).await {
                Ok(weather) => {
                    return CurrentConditions {
                        weather,
                        source: WeatherSource::OpenWeatherMap,
                        simulated: false,
                        fetched_at: Utc::now(),
                    };
                }
                Err(e) => {
                    tracing::warn!("Weather API failed, serving simulated conditions: {}", e);
                }
            }
        }

        CurrentConditions {
            weather: simulate_reading(),
            source: WeatherSource::Simulated,
            simulated: true,
            fetched_at: Utc::now(),
        }
    }
}

/// Simulated tropical conditions: 20-37 °C, 25-94 % humidity, 0-79 mm rain
fn simulate_reading() -> WeatherReading {
    let mut rng = rand::thread_rng();
    WeatherReading::new(
        rng.gen_range(20..38) as f64,
        rng.gen_range(25..95) as f64,
        rng.gen_range(0..80) as f64,
    )
}
