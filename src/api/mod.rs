//! REST API for tagging sessions
//!
//! Serves the same session registry as the MCP tools so a UI can drive
//! tagging over HTTP.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
