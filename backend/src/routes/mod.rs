//! Route definitions for the Prawn Farm Management Platform

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public, except /me)
        .nest("/auth", auth_routes())
        // Weather and care advisories (public)
        .nest("/weather", weather_routes())
        // Feeding schedule calculator (public) and journal (protected)
        .nest("/feeding", feeding_routes())
        // Protected routes - pond registry and intake tracking
        .nest("/ponds", pond_routes())
        // Predictions (protected list, public preview)
        .nest("/predictions", prediction_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/refresh", post(handlers::refresh))
        .merge(
            Router::new()
                .route("/me", get(handlers::me))
                .route_layer(middleware::from_fn(auth_middleware)),
        )
}

/// Weather and care advisory routes (public)
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::current_weather))
        .route("/care", get(handlers::weather_care))
        .route("/feeding", get(handlers::weather_feeding))
        .route("/harvest", get(handlers::weather_harvest))
}

/// Feeding schedule and journal routes
fn feeding_routes() -> Router<AppState> {
    Router::new()
        .route("/schedule", get(handlers::feeding_schedule))
        .merge(
            Router::new()
                .route(
                    "/records",
                    get(handlers::list_feeding_records).post(handlers::create_feeding_record),
                )
                .route("/records/:record_id", delete(handlers::delete_feeding_record))
                .route_layer(middleware::from_fn(auth_middleware)),
        )
}

/// Pond management routes (protected)
fn pond_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_ponds).post(handlers::create_pond))
        .route(
            "/:pond_id",
            get(handlers::get_pond)
                .put(handlers::update_pond)
                .delete(handlers::delete_pond),
        )
        .route(
            "/:pond_id/intake",
            get(handlers::list_feed_intake).post(handlers::record_feed_intake),
        )
        .route(
            "/:pond_id/intake/:record_id",
            delete(handlers::delete_feed_intake),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Prediction routes
fn prediction_routes() -> Router<AppState> {
    Router::new()
        .route("/preview", get(handlers::preview_prediction))
        .merge(
            Router::new()
                .route("/", get(handlers::list_predictions))
                .route_layer(middleware::from_fn(auth_middleware)),
        )
}
