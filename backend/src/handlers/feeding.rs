//! HTTP handlers for feeding schedules and the feeding journal

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::services::feeding::{CreateFeedingRecordInput, FeedingService};
use crate::AppState;
use shared::feeding::{calculate_feeding_schedule, FeedingSchedule};
use shared::validation::{validate_pond_size, validate_prawn_age, validate_stocking_density};

/// Query parameters for the feeding schedule calculator
#[derive(Debug, Deserialize)]
pub struct FeedingScheduleQuery {
    pub age_days: i32,
    pub pond_size_hectares: f64,
    pub stocking_density_per_acre: f64,
}

/// Calculate a feeding schedule from age, pond size, and stocking density
pub async fn feeding_schedule(
    Query(query): Query<FeedingScheduleQuery>,
) -> Result<Json<FeedingSchedule>, AppError> {
    validate_prawn_age(query.age_days).map_err(|message| AppError::Validation {
        field: "age_days".to_string(),
        message: message.to_string(),
    })?;
    validate_pond_size(query.pond_size_hectares).map_err(|message| AppError::Validation {
        field: "pond_size_hectares".to_string(),
        message: message.to_string(),
    })?;
    validate_stocking_density(query.stocking_density_per_acre).map_err(|message| {
        AppError::Validation {
            field: "stocking_density_per_acre".to_string(),
            message: message.to_string(),
        }
    })?;

    let schedule = calculate_feeding_schedule(
        query.age_days,
        query.pond_size_hectares,
        query.stocking_density_per_acre,
    );

    Ok(Json(schedule))
}

/// Add a feeding journal entry
pub async fn create_feeding_record(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateFeedingRecordInput>,
) -> impl IntoResponse {
    let service = FeedingService::new(state.db.clone());

    match service.create_record(current_user.0.user_id, input).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List feeding journal entries, newest first
pub async fn list_feeding_records(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> impl IntoResponse {
    let service = FeedingService::new(state.db.clone());

    match service.get_records(current_user.0.user_id).await {
        Ok(records) => (
            StatusCode::OK,
            Json(serde_json::json!({ "records": records })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a feeding journal entry
pub async fn delete_feeding_record(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(record_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = FeedingService::new(state.db.clone());

    match service.delete_record(current_user.0.user_id, record_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
