//! Remove play tool

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::{required_str, text_response};
use crate::tools::ToolContext;
use crate::types::McpResult;

/// Tool for removing a play label from the playbook
pub struct RemovePlayTool {
    ctx: ToolContext,
}

impl RemovePlayTool {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }
}

impl Tool for RemovePlayTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "remove_play",
            "Remove a play from the playbook. Already tagged events are kept",
            json!({
                "type": "object",
                "properties": {
                    "sessionId": { "type": "string", "description": "Session id (default: 'default')" },
                    "play": { "type": "string", "description": "Play label (case-insensitive)" }
                },
                "required": ["play"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let label = required_str(&params, "play")?;
        let session = self.ctx.existing_session(&params)?;
        let removed = session.lock().remove_play(label)?;
        Ok(text_response(format!("Removed play '{}'", removed)))
    }
}
