//! HTTP handlers for weather and care advisory endpoints

use axum::{extract::State, Json};
use serde::Serialize;

use crate::services::weather::{CurrentConditions, WeatherService};
use crate::AppState;
use shared::weather_care::{
    active_alert, care_recommendations, feed_adjustment, feeding_recommendation,
    harvest_recommendation, AlertNotice, CareRecommendation, FeedAdjustment,
    HarvestRecommendation,
};

/// Care advisory for the current conditions
#[derive(Debug, Serialize)]
pub struct WeatherCareResponse {
    pub conditions: CurrentConditions,
    pub alert: Option<AlertNotice>,
    pub recommendations: Vec<CareRecommendation>,
}

/// Feeding guidance for the current conditions
#[derive(Debug, Serialize)]
pub struct FeedingGuidanceResponse {
    pub conditions: CurrentConditions,
    pub recommendation: String,
    pub adjustment: FeedAdjustment,
}

/// Harvest outlook for the current conditions
#[derive(Debug, Serialize)]
pub struct HarvestOutlookResponse {
    pub conditions: CurrentConditions,
    pub recommendation: HarvestRecommendation,
}

/// Get current weather conditions, live or simulated
pub async fn current_weather(State(state): State<AppState>) -> Json<CurrentConditions> {
    let service = WeatherService::new(&state.config.weather);
    Json(service.current_conditions().await)
}

/// Get pond care recommendations for the current conditions
pub async fn weather_care(State(state): State<AppState>) -> Json<WeatherCareResponse> {
    let service = WeatherService::new(&state.config.weather);
    let conditions = service.current_conditions().await;

    let alert = active_alert(&conditions.weather);
    let recommendations = care_recommendations(&conditions.weather);

    Json(WeatherCareResponse {
        conditions,
        alert,
        recommendations,
    })
}

/// Get feeding guidance for the current conditions
pub async fn weather_feeding(State(state): State<AppState>) -> Json<FeedingGuidanceResponse> {
    let service = WeatherService::new(&state.config.weather);
    let conditions = service.current_conditions().await;

    let recommendation = feeding_recommendation(&conditions.weather);
    let adjustment = feed_adjustment(&conditions.weather);

    Json(FeedingGuidanceResponse {
        conditions,
        recommendation,
        adjustment,
    })
}

/// Get the harvest outlook for the current conditions
pub async fn weather_harvest(State(state): State<AppState>) -> Json<HarvestOutlookResponse> {
    let service = WeatherService::new(&state.config.weather);
    let conditions = service.current_conditions().await;

    let recommendation = harvest_recommendation(&conditions.weather);

    Json(HarvestOutlookResponse {
        conditions,
        recommendation,
    })
}
