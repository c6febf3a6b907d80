//! Metrics and export endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResponse, ApiResult};
use crate::api::state::AppState;
use crate::event_log::export::render;
use crate::event_log::ExportKind;
use crate::types::{PlayMetric, PlayerMetric, SessionTotals};

/// Query parameters for the metrics endpoint
#[derive(Debug, Deserialize)]
pub struct MetricsParams {
    /// Also return per-player rows
    #[serde(default, rename = "byPlayer")]
    pub by_player: bool,
}

/// Efficiency tables computed from one snapshot of the log
#[derive(Debug, Serialize)]
pub struct MetricsReport {
    pub plays: Vec<PlayMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<PlayerMetric>>,
    pub totals: SessionTotals,
}

/// GET /api/sessions/:id/metrics - Per-play efficiency, best first
pub async fn get_metrics(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<MetricsParams>,
) -> ApiResult<MetricsReport> {
    let report = state.registry.with_session(&id, |s| MetricsReport {
        plays: s.metrics(),
        players: params.by_player.then(|| s.player_metrics()),
        totals: s.totals(),
    })?;
    Ok(Json(ApiResponse::new(report)))
}

/// GET /api/sessions/:id/export/:kind - Download CSV or JSON
pub async fn export(
    State(state): State<Arc<AppState>>,
    Path((id, kind)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let kind = ExportKind::parse(&kind)
        .ok_or_else(|| ApiError::bad_request(format!("Unknown export kind '{}'", kind)))?;

    let (events, metrics, game_date) = state
        .registry
        .with_session(&id, |s| (s.snapshot(), s.metrics(), s.context().game_date))?;
    let content = render(kind, &events, &metrics)?;

    let disposition = format!("attachment; filename=\"{}\"", kind.file_name(game_date));
    Ok((
        [
            (header::CONTENT_TYPE, kind.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        content,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, send, send_json, started_session};
    use axum::http::StatusCode;
    use serde_json::json;

    async fn tag(app: &axum::Router, id: &str, play: &str, result: &str) {
        let uri = format!("/api/sessions/{}/events", id);
        let (status, _) = send_json(app, "POST", &uri, Some(json!({ "play": play, "result": result }))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_metrics_scenario() {
        let (app, _) = app();
        let id = started_session(&app).await;
        tag(&app, &id, "PickAndRoll", "Made 2").await;
        tag(&app, &id, "PickAndRoll", "Missed 3").await;
        tag(&app, &id, "Isolation", "Made 3").await;
        tag(&app, &id, "PickAndRoll", "Foul").await;

        let (status, body) =
            send_json(&app, "GET", &format!("/api/sessions/{}/metrics", id), None).await;
        assert_eq!(status, StatusCode::OK);

        let plays = &body["data"]["plays"];
        assert_eq!(plays[0]["play"], "Isolation");
        assert_eq!(plays[0]["frequency"], 0.25);
        assert_eq!(plays[1]["play"], "PickAndRoll");
        assert_eq!(plays[1]["attempts"], 3);
        assert_eq!(plays[1]["successRate"], 0.5);
        assert!(body["data"]["players"].is_null());
        assert_eq!(body["data"]["totals"]["fouls"], 1);

        let (_, body) = send_json(
            &app,
            "GET",
            &format!("/api/sessions/{}/metrics?byPlayer=true", id),
            None,
        )
        .await;
        assert_eq!(body["data"]["players"][0]["attempts"], 4);
    }

    #[tokio::test]
    async fn test_export_csv_download() {
        let (app, _) = app();
        let id = started_session(&app).await;
        tag(&app, &id, "Isolation", "Made 3").await;

        let (status, bytes) =
            send(&app, "GET", &format!("/api/sessions/{}/export/events.csv", id), None).await;
        assert_eq!(status, StatusCode::OK);
        let csv = String::from_utf8(bytes).unwrap();
        assert!(csv.starts_with("Date,Opponent,Quarter,Player,Play,Result,Points,Notes,RecordedAt"));
        assert!(csv.contains("2024-01-12,Lakers,1,,Isolation,Made 3,3,,"));

        let (status, _) =
            send(&app, "GET", &format!("/api/sessions/{}/export/report.pdf", id), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
