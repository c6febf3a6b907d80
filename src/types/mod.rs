//! Data types for the play tagger
//!
//! This module contains the event, context and metric records shared by the
//! event log, the metrics engine and the collaborator surfaces.

mod context;
mod event;
mod metric;
mod player;

pub use context::{Quarter, SessionContext};
pub use event::{ShotResult, TaggedEvent};
pub use metric::{PlayMetric, PlayerMetric, SessionTotals};
pub use player::Player;

/// Result type for MCP operations
pub type McpResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
