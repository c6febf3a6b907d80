//! Report tools: events, metrics, exports and session overview

mod export_data;
mod get_events;
mod get_metrics;
mod get_session;

pub use export_data::ExportDataTool;
pub use get_events::GetEventsTool;
pub use get_metrics::GetMetricsTool;
pub use get_session::GetSessionTool;
