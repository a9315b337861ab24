//! HTTP handlers for pond performance predictions

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::services::prediction::{PondPredictionEntry, PredictionService};
use crate::services::weather::{CurrentConditions, WeatherService};
use crate::AppState;
use shared::models::WeatherReading;
use shared::prediction::{calculate_pond_prediction, PondConditions, PondPrediction};
use shared::validation::{validate_consumption_rate, validate_pond_size};

/// Predictions for every registered pond under the current conditions
#[derive(Debug, Serialize)]
pub struct PondPredictionsResponse {
    pub conditions: CurrentConditions,
    pub predictions: Vec<PondPredictionEntry>,
}

/// Query parameters for a one-off prediction
#[derive(Debug, Deserialize)]
pub struct PredictionPreviewQuery {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub rainfall_mm: f64,
    pub size_hectares: f64,
    pub consumption_rate_pct: f64,
}

/// Run the prediction engine over the current user's ponds
pub async fn list_predictions(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Result<Json<PondPredictionsResponse>, AppError> {
    let weather_service = WeatherService::new(&state.config.weather);
    let conditions = weather_service.current_conditions().await;

    let service = PredictionService::new(state.db.clone());
    let predictions = service
        .predictions_for_user(current_user.0.user_id, &conditions.weather)
        .await?;

    Ok(Json(PondPredictionsResponse {
        conditions,
        predictions,
    }))
}

/// Compute a single prediction from explicit conditions
pub async fn preview_prediction(
    Query(query): Query<PredictionPreviewQuery>,
) -> Result<Json<PondPrediction>, AppError> {
    validate_pond_size(query.size_hectares).map_err(|message| AppError::Validation {
        field: "size_hectares".to_string(),
        message: message.to_string(),
    })?;
    validate_consumption_rate(query.consumption_rate_pct).map_err(|message| {
        AppError::Validation {
            field: "consumption_rate_pct".to_string(),
            message: message.to_string(),
        }
    })?;

    let weather = WeatherReading::new(query.temperature_c, query.humidity_pct, query.rainfall_mm);
    let prediction = calculate_pond_prediction(
        &weather,
        &PondConditions {
            size_hectares: query.size_hectares,
            consumption_rate_pct: query.consumption_rate_pct,
        },
    );

    Ok(Json(prediction))
}
