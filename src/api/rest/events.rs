//! Event log endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResponse, ApiResult};
use crate::api::state::AppState;
use crate::error::TaggerError;
use crate::session::TagRequest;
use crate::types::{ShotResult, TaggedEvent};
use crate::utils::parse_timestamp;

/// Body of a tag request; `play` and `player` fall back to the selection
#[derive(Debug, Deserialize)]
pub struct TagEventBody {
    pub result: String,
    pub play: Option<String>,
    pub player: Option<String>,
    pub timestamp: Option<String>,
    pub notes: Option<String>,
}

impl TagEventBody {
    fn into_request(self) -> Result<TagRequest, TaggerError> {
        let result: ShotResult = self.result.parse().map_err(TaggerError::InvalidResult)?;
        let mut request = TagRequest::new(result);
        request.play = self.play;
        request.player = self.player;
        request.notes = self.notes;
        if let Some(raw) = self.timestamp.as_deref() {
            request.timestamp = Some(parse_timestamp(raw)?);
        }
        Ok(request)
    }
}

/// Result of an undo
#[derive(Debug, Serialize)]
pub struct UndoResult {
    /// The removed event, `null` when the log was empty
    pub removed: Option<TaggedEvent>,
    pub remaining: usize,
}

/// GET /api/sessions/:id/events - The log in insertion order
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Vec<TaggedEvent>> {
    let events = state.registry.with_session(&id, |s| s.snapshot())?;
    let total = events.len();
    Ok(Json(ApiResponse::with_total(events, total)))
}

/// POST /api/sessions/:id/events - Tag one event
pub async fn tag_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<TagEventBody>,
) -> Result<(StatusCode, Json<ApiResponse<TaggedEvent>>), ApiError> {
    let request = body.into_request()?;
    let event = state.registry.with_session(&id, |s| s.tag(request))??;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(event))))
}

/// DELETE /api/sessions/:id/events/last - Undo the most recent event
pub async fn undo_last(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<UndoResult> {
    let result = state.registry.with_session(&id, |s| {
        let removed = s.undo();
        UndoResult {
            removed,
            remaining: s.log().len(),
        }
    })?;
    Ok(Json(ApiResponse::new(result)))
}

/// POST /api/sessions/:id/reset - Clear the log, keeping setup
pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.registry.with_session(&id, |s| s.reset())?;
    Ok(StatusCode::NO_CONTENT)
}
