//! Select tool

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::{json_response, optional_str};
use crate::tools::ToolContext;
use crate::types::McpResult;

/// Tool for choosing the player and play the next tag applies to
pub struct SelectTool {
    ctx: ToolContext,
}

impl SelectTool {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }
}

impl Tool for SelectTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "select",
            "Select the player and/or play for the next tag_event. The selection clears after each tag",
            json!({
                "type": "object",
                "properties": {
                    "sessionId": { "type": "string", "description": "Session id (default: 'default')" },
                    "playerId": { "type": "integer", "minimum": 1, "description": "Roster id to select" },
                    "play": { "type": "string", "description": "Play label to select" },
                    "clear": { "type": "boolean", "description": "Replace the whole selection; omitted fields become unselected", "default": false }
                }
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let session = self.ctx.existing_session(&params)?;
        let mut session = session.lock();

        let clear = params.get("clear").and_then(|v| v.as_bool()).unwrap_or(false);
        let player = params
            .get("playerId")
            .and_then(|v| v.as_u64())
            .map(|id| u32::try_from(id).map_err(|_| format!("playerId {} out of range", id)))
            .transpose()?;
        let play = optional_str(&params, "play");
        if clear {
            session.replace_selection(player, play)?;
        } else {
            session.select(player, play)?;
        }

        let overview = session.overview();
        json_response(&json!({
            "selectedPlayer": overview.selected_player,
            "selectedPlay": overview.selected_play,
        }))
    }
}
