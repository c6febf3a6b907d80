//! Reset session tool

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::text_response;
use crate::tools::ToolContext;
use crate::types::McpResult;

/// Tool for clearing a session's event log
///
/// Context, roster and playbook are kept.
pub struct ResetSessionTool {
    ctx: ToolContext,
}

impl ResetSessionTool {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }
}

impl Tool for ResetSessionTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "reset_session",
            "Clear all tagged events and the current selection. Setup is kept",
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
        let cleared = session.log().len();
        session.reset();
        Ok(text_response(format!("Cleared {} events", cleared)))
    }
}
