//! REST API module for HTTP endpoints
//!
//! - `GET|POST /api/sessions` - List or create sessions
//! - `GET|DELETE /api/sessions/:id` - Session overview, drop a session
//! - `GET|POST /api/sessions/:id/events` - Read the log, tag an event
//! - `DELETE /api/sessions/:id/events/last` - Undo
//! - `POST /api/sessions/:id/reset` - Clear the log
//! - `GET /api/sessions/:id/metrics` - Efficiency table
//! - `GET /api/sessions/:id/export/:kind` - CSV/JSON download

pub mod events;
pub mod metrics;
pub mod sessions;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::TaggerError;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, total: None }
    }

    pub fn with_total(data: T, total: usize) -> Self {
        Self {
            data,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: message.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

impl From<TaggerError> for ApiError {
    fn from(err: TaggerError) -> Self {
        match &err {
            TaggerError::SessionNotFound(_) => ApiError::not_found(err.to_string()),
            e if e.is_client_error() => ApiError::bad_request(err.to_string()),
            _ => {
                tracing::error!(error = %err, "request failed");
                ApiError::internal(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Result type for route handlers
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;
