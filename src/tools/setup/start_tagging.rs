//! Start tagging tool

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::tools::ToolContext;
use crate::types::McpResult;

/// Tool for switching a session from setup to tagging
pub struct StartTaggingTool {
    ctx: ToolContext,
}

impl StartTaggingTool {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }
}

impl Tool for StartTaggingTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "start_tagging",
            "Begin tagging. Requires an opponent and at least one play",
            json!({
                "type": "object",
                "properties": {
                    "sessionId": { "type": "string", "description": "Session id (default: 'default')" }
                }
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let session = self.ctx.existing_session(&params)?;
        let mut session = session.lock();
        session.start_tagging()?;
        Ok(text_response(format!(
            "Tagging started vs {} ({}, quarter {})",
            session.context().opponent,
            session.context().game_date,
            session.context().quarter
        )))
    }
}
