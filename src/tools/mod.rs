//! MCP Tools implementation
//!
//! Tools are grouped the way a tagging session runs:
//! - Setup tools (6): game context, roster and playbook
//! - Tagging tools (4): selection, tagging, undo and reset
//! - Report tools (4): events, metrics, exports and session overview

pub mod report;
pub mod setup;
pub mod tagging;

use std::io::{BufRead, Write};
use std::sync::Arc;

use serde_json::Value;

use crate::config::TaggerConfig;
use crate::error::TaggerResult;
use crate::server::{session_id, McpServer};
use crate::session::{SessionRegistry, SharedSession, DEFAULT_SESSION_ID};

pub use report::{ExportDataTool, GetEventsTool, GetMetricsTool, GetSessionTool};
pub use setup::{
    AddPlayTool, AddPlayerTool, RemovePlayTool, RemovePlayerTool, SetContextTool,
    StartTaggingTool,
};
pub use tagging::{ResetSessionTool, SelectTool, TagEventTool, UndoLastTool};

/// State shared by every tool
#[derive(Clone)]
pub struct ToolContext {
    pub registry: Arc<SessionRegistry>,
    pub config: Arc<TaggerConfig>,
}

impl ToolContext {
    pub fn new(registry: Arc<SessionRegistry>, config: Arc<TaggerConfig>) -> Self {
        Self { registry, config }
    }

    /// Session named by the call's `sessionId`, created on first use
    pub fn session(&self, args: &Value) -> SharedSession {
        self.registry.get_or_create(session_id(args))
    }

    /// Session named by the call's `sessionId`, which must already exist
    ///
    /// The default session is always available.
    pub fn existing_session(&self, args: &Value) -> TaggerResult<SharedSession> {
        match session_id(args) {
            DEFAULT_SESSION_ID => Ok(self.registry.get_or_create(DEFAULT_SESSION_ID)),
            id => self.registry.get(id),
        }
    }
}

/// Register all tools with the MCP server
pub fn register_all_tools<R: BufRead, W: Write>(server: &mut McpServer<R, W>, ctx: ToolContext) {
    // Setup tools (6)
    server.register_tool(Box::new(SetContextTool::new(ctx.clone())));
    server.register_tool(Box::new(AddPlayerTool::new(ctx.clone())));
    server.register_tool(Box::new(RemovePlayerTool::new(ctx.clone())));
    server.register_tool(Box::new(AddPlayTool::new(ctx.clone())));
    server.register_tool(Box::new(RemovePlayTool::new(ctx.clone())));
    server.register_tool(Box::new(StartTaggingTool::new(ctx.clone())));

    // Tagging tools (4)
    server.register_tool(Box::new(SelectTool::new(ctx.clone())));
    server.register_tool(Box::new(TagEventTool::new(ctx.clone())));
    server.register_tool(Box::new(UndoLastTool::new(ctx.clone())));
    server.register_tool(Box::new(ResetSessionTool::new(ctx.clone())));

    // Report tools (4)
    server.register_tool(Box::new(GetEventsTool::new(ctx.clone())));
    server.register_tool(Box::new(GetMetricsTool::new(ctx.clone())));
    server.register_tool(Box::new(ExportDataTool::new(ctx.clone())));
    server.register_tool(Box::new(GetSessionTool::new(ctx)));
}
