//! Metrics computation
//!
//! Derives per-play and per-player efficiency tables from a snapshot of the
//! event log. Nothing here is stored; every call recomputes from scratch.

mod engine;

pub use engine::MetricsEngine;
