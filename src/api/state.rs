//! Shared application state for HTTP handlers

use std::sync::Arc;

use crate::config::TaggerConfig;
use crate::session::SessionRegistry;

/// State handed to every route
pub struct AppState {
    /// Live tagging sessions
    pub registry: Arc<SessionRegistry>,

    /// Export settings
    pub config: Arc<TaggerConfig>,
}

impl AppState {
    pub fn new(registry: Arc<SessionRegistry>, config: Arc<TaggerConfig>) -> Self {
        Self { registry, config }
    }
}
