//! CSV and JSON export of the event log and the metrics table
//!
//! Exports serialize records field-for-field in data-model order.

use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::TaggerResult;
use crate::types::{PlayMetric, TaggedEvent};
use crate::utils::atomic::atomic_write;

/// Column headers of the event log CSV
pub const EVENT_CSV_HEADERS: [&str; 9] = [
    "Date",
    "Opponent",
    "Quarter",
    "Player",
    "Play",
    "Result",
    "Points",
    "Notes",
    "RecordedAt",
];

/// Column headers of the metrics CSV, written even when the table is empty
pub const METRIC_CSV_HEADERS: [&str; 6] = [
    "play",
    "attempts",
    "points",
    "pointsPerAttempt",
    "frequency",
    "successRate",
];

/// What to export and in which format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    EventsCsv,
    MetricsCsv,
    EventsJson,
    MetricsJson,
}

impl ExportKind {
    /// Parse names such as `events.csv` or `metrics_json`
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace('_', ".").as_str() {
            "events.csv" | "log.csv" => Some(ExportKind::EventsCsv),
            "metrics.csv" => Some(ExportKind::MetricsCsv),
            "events.json" | "log.json" => Some(ExportKind::EventsJson),
            "metrics.json" => Some(ExportKind::MetricsJson),
            _ => None,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportKind::EventsCsv | ExportKind::MetricsCsv => "text/csv",
            ExportKind::EventsJson | ExportKind::MetricsJson => "application/json",
        }
    }

    /// Default file name for a game, e.g. `tags_2024-01-12.csv`
    pub fn file_name(self, game_date: NaiveDate) -> String {
        let (stem, ext) = match self {
            ExportKind::EventsCsv => ("tags", "csv"),
            ExportKind::MetricsCsv => ("metrics", "csv"),
            ExportKind::EventsJson => ("tags", "json"),
            ExportKind::MetricsJson => ("metrics", "json"),
        };
        format!("{}_{}.{}", stem, game_date.format("%Y-%m-%d"), ext)
    }
}

/// Render the event log as CSV
pub fn events_to_csv(events: &[TaggedEvent]) -> TaggerResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EVENT_CSV_HEADERS)?;

    for event in events {
        let game_date = event.game_date.format("%Y-%m-%d").to_string();
        let points = event.points.to_string();
        let recorded_at = event.timestamp.to_rfc3339();
        writer.write_record([
            game_date.as_str(),
            event.opponent.as_str(),
            event.quarter.as_str(),
            event.player.as_deref().unwrap_or(""),
            event.play.as_str(),
            event.result.as_str(),
            points.as_str(),
            event.notes.as_deref().unwrap_or(""),
            recorded_at.as_str(),
        ])?;
    }

    finish(writer)
}

/// Render the metrics table as CSV, one row per play in table order
pub fn metrics_to_csv(metrics: &[PlayMetric]) -> TaggerResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(METRIC_CSV_HEADERS)?;
    for metric in metrics {
        writer.serialize(metric)?;
    }
    finish(writer)
}

/// Render the event log as a pretty JSON array
pub fn events_to_json(events: &[TaggedEvent]) -> TaggerResult<String> {
    Ok(serde_json::to_string_pretty(events)?)
}

/// Render the metrics table as a pretty JSON array
pub fn metrics_to_json(metrics: &[PlayMetric]) -> TaggerResult<String> {
    Ok(serde_json::to_string_pretty(metrics)?)
}

/// Render an export of the given kind
pub fn render(
    kind: ExportKind,
    events: &[TaggedEvent],
    metrics: &[PlayMetric],
) -> TaggerResult<String> {
    match kind {
        ExportKind::EventsCsv => events_to_csv(events),
        ExportKind::MetricsCsv => metrics_to_csv(metrics),
        ExportKind::EventsJson => events_to_json(events),
        ExportKind::MetricsJson => metrics_to_json(metrics),
    }
}

/// Write an export into `dir`, replacing any previous file atomically
pub fn save_export(dir: &Path, file_name: &str, content: &str) -> TaggerResult<PathBuf> {
    let path = dir.join(file_name);
    atomic_write(&path, content)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "export saved");
    Ok(path)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> TaggerResult<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    String::from_utf8(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}
