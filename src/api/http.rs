//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{events, metrics, sessions};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Sessions
        .route(
            "/api/sessions",
            get(sessions::list_sessions).post(sessions::create_session),
        )
        .route(
            "/api/sessions/:id",
            get(sessions::get_session).delete(sessions::delete_session),
        )
        .route("/api/sessions/:id/context", put(sessions::update_context))
        // Event log
        .route(
            "/api/sessions/:id/events",
            get(events::list_events).post(events::tag_event),
        )
        .route("/api/sessions/:id/events/last", delete(events::undo_last))
        .route("/api/sessions/:id/reset", post(events::reset_session))
        // Reports
        .route("/api/sessions/:id/metrics", get(metrics::get_metrics))
        .route("/api/sessions/:id/export/:kind", get(metrics::export))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
