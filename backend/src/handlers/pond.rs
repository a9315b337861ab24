//! Pond management HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::middleware::CurrentUser;
use crate::services::pond::{
    CreatePondInput, PondService, RecordFeedIntakeInput, UpdatePondInput,
};
use crate::AppState;

/// List all ponds for the current user
pub async fn list_ponds(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> impl IntoResponse {
    let service = PondService::new(state.db.clone());

    match service.get_ponds(current_user.0.user_id).await {
        Ok(ponds) => (StatusCode::OK, Json(serde_json::json!({ "ponds": ponds }))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a specific pond
pub async fn get_pond(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(pond_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = PondService::new(state.db.clone());

    match service.get_pond(current_user.0.user_id, pond_id).await {
        Ok(pond) => (StatusCode::OK, Json(pond)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Register a new pond
pub async fn create_pond(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreatePondInput>,
) -> impl IntoResponse {
    let service = PondService::new(state.db.clone());

    match service.create_pond(current_user.0.user_id, input).await {
        Ok(pond) => (StatusCode::CREATED, Json(pond)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update a pond
pub async fn update_pond(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(pond_id): Path<Uuid>,
    Json(input): Json<UpdatePondInput>,
) -> impl IntoResponse {
    let service = PondService::new(state.db.clone());

    match service
        .update_pond(current_user.0.user_id, pond_id, input)
        .await
    {
        Ok(pond) => (StatusCode::OK, Json(pond)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a pond and its intake history
pub async fn delete_pond(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(pond_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = PondService::new(state.db.clone());

    match service.delete_pond(current_user.0.user_id, pond_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Record a feed intake observation for a pond
pub async fn record_feed_intake(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(pond_id): Path<Uuid>,
    Json(input): Json<RecordFeedIntakeInput>,
) -> impl IntoResponse {
    let service = PondService::new(state.db.clone());

    match service
        .record_feed_intake(current_user.0.user_id, pond_id, input)
        .await
    {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List feed intake records for a pond, newest first
pub async fn list_feed_intake(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(pond_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = PondService::new(state.db.clone());

    match service.get_feed_intake(current_user.0.user_id, pond_id).await {
        Ok(records) => (
            StatusCode::OK,
            Json(serde_json::json!({ "records": records })),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a feed intake record
pub async fn delete_feed_intake(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path((pond_id, record_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let service = PondService::new(state.db.clone());

    match service
        .delete_feed_intake(current_user.0.user_id, pond_id, record_id)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
