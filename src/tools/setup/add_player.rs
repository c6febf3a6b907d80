//! Add player tool

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::{json_response, required_str};
use crate::tools::ToolContext;
use crate::types::McpResult;

/// Tool for adding a player to the session roster
pub struct AddPlayerTool {
    ctx: ToolContext,
}

impl AddPlayerTool {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }
}

impl Tool for AddPlayerTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "add_player",
            "Add a player to the roster; returns the player with its id",
            json!({
                "type": "object",
                "properties": {
                    "sessionId": { "type": "string", "description": "Session id (default: 'default')" },
                    "name": { "type": "string", "description": "Player name or number" }
                },
                "required": ["name"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let name = required_str(&params, "name")?;
        let session = self.ctx.session(&params);
        let player = session.lock().add_player(name)?;
        json_response(&player)
    }
}
