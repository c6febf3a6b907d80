//! Remove player tool

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::{required_u32, text_response};
use crate::tools::ToolContext;
use crate::types::McpResult;

/// Tool for removing a player from the roster
///
/// Events already tagged keep the player's name.
pub struct RemovePlayerTool {
    ctx: ToolContext,
}

impl RemovePlayerTool {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }
}

impl Tool for RemovePlayerTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "remove_player",
            "Remove a player from the roster by id",
            json!({
                "type": "object",
                "properties": {
                    "sessionId": { "type": "string", "description": "Session id (default: 'default')" },
                    "playerId": { "type": "integer", "minimum": 1, "description": "Id returned by add_player" }
                },
                "required": ["playerId"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let id = required_u32(&params, "playerId")?;
        let session = self.ctx.existing_session(&params)?;
        let player = session.lock().remove_player(id)?;
        Ok(text_response(format!("Removed player '{}'", player.name)))
    }
}
