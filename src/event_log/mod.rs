//! Event Log Module
//!
//! This module provides the authoritative per-session history of tagged
//! events and its serialization:
//! - `EventLog`: ordered, append-only log with single-step undo and reset
//! - `export`: CSV/JSON rendering of the log and the metrics table
//!
//! # Flow
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌────────────────────┐
//! │ tag / undo / │───►│   EventLog   │───►│ snapshot()         │
//! │ reset        │    │ Vec<Event>   │    │ → MetricsEngine    │
//! └──────────────┘    └──────────────┘    │ → export::render() │
//!                                         └────────────────────┘
//! ```

pub mod export;
mod log;

pub use export::ExportKind;
pub use log::EventLog;
