//! Derived statistics types
//!
//! None of these are stored; they are recomputed from the event log on demand.
//! Field order is the export contract.

use serde::{Deserialize, Serialize};

/// Aggregated efficiency for one play label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayMetric {
    pub play: String,
    pub attempts: u32,
    pub points: u32,
    pub points_per_attempt: f64,
    pub frequency: f64,
    pub success_rate: f64,
}

/// Aggregated efficiency for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMetric {
    /// `None` groups events tagged without a player
    pub player: Option<String>,
    pub attempts: u32,
    pub points: u32,
    pub points_per_attempt: f64,
    pub frequency: f64,
    pub success_rate: f64,
}

/// Whole-log summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionTotals {
    pub events: u32,
    pub points: u32,
    pub points_per_attempt: f64,
    pub shot_attempts: u32,
    pub made_shots: u32,
    pub fouls: u32,
    pub success_rate: f64,
}
