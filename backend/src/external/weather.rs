//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap current-weather API

use reqwest::Client;
use serde::Deserialize;
use shared::WeatherReading;

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    main: OWMMain,
    rain: Option<OWMRain>,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OWMRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current conditions for a city
    pub async fn get_current_weather(&self, city: &str) -> AppResult<WeatherReading> {
        let url = format!(
            "{}/weather?q={}&units=metric&appid={}",
            self.base_url, city, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Internal(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OWMCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse weather response: {}", e)))?;

        Ok(convert_current_response(data))
    }
}

/// Convert the OpenWeatherMap response to a weather reading
///
/// Temperature is rounded to whole degrees, humidity is taken as-is, and
/// rainfall is the 1h figure scaled to mm, 0 when the field is absent.
fn convert_current_response(data: OWMCurrentResponse) -> WeatherReading {
    let rainfall_mm = data
        .rain
        .and_then(|r| r.one_hour)
        .map(|mm| (mm * 10.0).round())
        .unwrap_or(0.0);

    WeatherReading::new(data.main.temp.round(), data.main.humidity, rainfall_mm)
}
