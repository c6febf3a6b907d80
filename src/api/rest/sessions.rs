//! Session endpoints

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
use crate::session::{SessionOverview, TaggingSession};
use crate::types::{Quarter, SessionContext};
use crate::utils::parse_game_date;

/// Optional setup applied when a session is created
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionBody {
    pub opponent: Option<String>,
    pub game_date: Option<String>,
    pub quarter: Option<String>,
    #[serde(default)]
    pub plays: Vec<String>,
    #[serde(default)]
    pub players: Vec<String>,
    /// Start tagging right away
    #[serde(default)]
    pub start: bool,
}

/// A session together with its id
#[derive(Debug, Serialize)]
pub struct SessionDetail {
    pub id: String,
    #[serde(flatten)]
    pub overview: SessionOverview,
}

/// GET /api/sessions - List session ids
pub async fn list_sessions(State(state): State<Arc<AppState>>) -> ApiResult<Vec<String>> {
    let ids = state.registry.ids();
    let total = ids.len();
    Ok(Json(ApiResponse::with_total(ids, total)))
}

/// POST /api/sessions - Create a session, optionally with its setup
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    body: Option<Json<CreateSessionBody>>,
) -> Result<(StatusCode, Json<ApiResponse<SessionDetail>>), ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();

    // Validate everything before the session exists
    let mut session = TaggingSession::new();
    apply_setup(&mut session, body)?;

    let id = state.registry.create();
    let overview = state.registry.with_session(&id, |s| {
        *s = session;
        s.overview()
    })?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(SessionDetail { id, overview })),
    ))
}

/// GET /api/sessions/:id - Session overview
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<SessionDetail> {
    let overview = state.registry.with_session(&id, |s| s.overview())?;
    Ok(Json(ApiResponse::new(SessionDetail { id, overview })))
}

/// DELETE /api/sessions/:id - Drop a session
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.registry.remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(TaggerError::SessionNotFound(id).into())
    }
}

/// Context fields to change; omitted fields keep their value
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContextBody {
    pub opponent: Option<String>,
    pub game_date: Option<String>,
    pub quarter: Option<String>,
}

/// PUT /api/sessions/:id/context - Change opponent, date or quarter
pub async fn update_context(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateContextBody>,
) -> ApiResult<SessionContext> {
    let game_date = body.game_date.as_deref().map(parse_game_date).transpose()?;
    let quarter = parse_quarter(body.quarter.as_deref())?;

    let context = state.registry.with_session(&id, |s| {
        s.update_context(body.opponent.as_deref(), game_date, quarter)
            .cloned()
    })??;
    Ok(Json(ApiResponse::new(context)))
}

fn parse_quarter(raw: Option<&str>) -> Result<Option<Quarter>, TaggerError> {
    raw.map(|q| q.parse::<Quarter>().map_err(TaggerError::InvalidQuarter))
        .transpose()
}

fn apply_setup(session: &mut TaggingSession, body: CreateSessionBody) -> Result<(), TaggerError> {
    let game_date = body.game_date.as_deref().map(parse_game_date).transpose()?;
    let quarter = parse_quarter(body.quarter.as_deref())?;

    session.update_context(body.opponent.as_deref(), game_date, quarter)?;
    for play in &body.plays {
        session.add_play(play)?;
    }
    for player in &body.players {
        session.add_player(player)?;
    }
    if body.start {
        session.start_tagging()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, send, send_json};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_and_get_session() {
        let (app, registry) = app();

        let (status, body) = send_json(
            &app,
            "POST",
            "/api/sessions",
            Some(json!({ "opponent": "Lakers", "plays": ["Horns"], "quarter": "3", "start": true })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(body["data"]["started"], true);
        assert_eq!(body["data"]["context"]["quarter"], "3");
        assert_eq!(registry.len(), 1);

        let (status, body) = send_json(&app, "GET", &format!("/api/sessions/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["plays"], json!(["Horns"]));
    }

    #[tokio::test]
    async fn test_create_without_body() {
        let (app, _) = app();
        let (status, body) = send_json(&app, "POST", "/api/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["missing"], json!(["Opponent", "Plays"]));
    }

    #[tokio::test]
    async fn test_create_rejects_incomplete_start() {
        let (app, registry) = app();
        let (status, body) = send_json(
            &app,
            "POST",
            "/api/sessions",
            Some(json!({ "opponent": "Lakers", "start": true })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_update_context_keeps_omitted_fields() {
        let (app, _) = app();
        let (_, body) = send_json(
            &app,
            "POST",
            "/api/sessions",
            Some(json!({ "opponent": "Lakers", "gameDate": "2024-01-12" })),
        )
        .await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let uri = format!("/api/sessions/{}/context", id);
        let (status, body) = send_json(&app, "PUT", &uri, Some(json!({ "quarter": "OT" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["opponent"], "Lakers");
        assert_eq!(body["data"]["gameDate"], "2024-01-12");
        assert_eq!(body["data"]["quarter"], "OT");

        let (status, _) = send_json(&app, "PUT", &uri, Some(json!({ "quarter": "5" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_keeps_game_date_without_opponent() {
        let (app, _) = app();
        let (status, body) = send_json(
            &app,
            "POST",
            "/api/sessions",
            Some(json!({ "gameDate": "2020-05-05", "plays": ["Horns"] })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["context"]["gameDate"], "2020-05-05");
        assert_eq!(body["data"]["missing"], json!(["Opponent"]));
    }

    #[tokio::test]
    async fn test_update_context_before_opponent_is_set() {
        let (app, registry) = app();
        let id = registry.create();
        let uri = format!("/api/sessions/{}/context", id);

        let (status, body) =
            send_json(&app, "PUT", &uri, Some(json!({ "quarter": "2", "gameDate": "2020-05-05" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["quarter"], "2");
        assert_eq!(body["data"]["gameDate"], "2020-05-05");
        assert_eq!(body["data"]["opponent"], "");

        let (status, body) = send_json(&app, "PUT", &uri, Some(json!({ "opponent": " " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Opponent must not be empty");
    }

    #[tokio::test]
    async fn test_delete_session() {
        let (app, registry) = app();
        let id = registry.create();

        let (status, _) = send(&app, "DELETE", &format!("/api/sessions/{}", id), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send_json(&app, "GET", &format!("/api/sessions/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }
}
