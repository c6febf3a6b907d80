//! Get session tool

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::json_response;
use crate::tools::ToolContext;
use crate::types::McpResult;

/// Tool for inspecting a session's setup, selection and progress
pub struct GetSessionTool {
    ctx: ToolContext,
}

impl GetSessionTool {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }
}

impl Tool for GetSessionTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "get_session",
            "Show the session's context, roster, playbook, selection and what is missing before tagging can start",
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
        let overview = session.lock().overview();
        json_response(&overview)
    }
}
