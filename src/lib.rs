//! Play Tagger
//!
//! Records basketball play outcomes as an append-only event log and derives
//! per-play efficiency from it: points per attempt, frequency and success
//! rate, ranked best first.
//!
//! # Modules
//!
//! - `types`: Tagged events, game context and metric rows
//! - `event_log`: Append-only log plus CSV/JSON export
//! - `metrics`: Pure recomputation of the efficiency table
//! - `session`: Per-game setup, selection and the session registry
//! - `validation`: Input normalization at the tagging boundary
//! - `protocol` / `server` / `tools`: MCP over stdio
//! - `api`: REST routes over the same registry
//! - `config`: Environment-driven settings
//!
//! # Example
//!
//! ```
//! use play_tagger::session::{TagRequest, TaggingSession};
//! use play_tagger::types::ShotResult;
//!
//! let mut session = TaggingSession::new();
//! session.set_context("Lakers", None, None).unwrap();
//! session.add_play("PickAndRoll").unwrap();
//! session.start_tagging().unwrap();
//! session.tag(TagRequest::new(ShotResult::Made2).play("PickAndRoll")).unwrap();
//!
//! let table = session.metrics();
//! assert_eq!(table[0].points_per_attempt, 2.0);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod event_log;
pub mod metrics;
pub mod protocol;
pub mod server;
pub mod session;
pub mod tools;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::TaggerConfig;
pub use error::{TaggerError, TaggerResult};
pub use event_log::EventLog;
pub use metrics::MetricsEngine;
pub use protocol::{McpTool, ServerInfo, Tool};
pub use server::McpServer;
pub use session::{SessionRegistry, TagRequest, TaggingSession};
pub use types::{
    McpResult, PlayMetric, PlayerMetric, Quarter, SessionContext, SessionTotals, ShotResult,
    TaggedEvent,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
