//! Set context tool

use serde_json::{json, Value};

use crate::error::TaggerError;
use crate::protocol::{McpTool, Tool};
use crate::server::{json_response, optional_str};
use crate::tools::ToolContext;
use crate::types::{McpResult, Quarter};
use crate::utils::parse_game_date;

/// Tool for setting the opponent, game date and quarter of a session
pub struct SetContextTool {
    ctx: ToolContext,
}

impl SetContextTool {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }
}

impl Tool for SetContextTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "set_context",
            "Set the game context (opponent, date, quarter) stamped onto every later event. Omitted fields keep their value",
            json!({
                "type": "object",
                "properties": {
                    "sessionId": { "type": "string", "description": "Session id (default: 'default')" },
                    "opponent": { "type": "string", "description": "Opponent name (default: unchanged)" },
                    "gameDate": { "type": "string", "description": "Game date, YYYY-MM-DD (default: unchanged)" },
                    "quarter": { "type": "string", "enum": ["1", "2", "3", "4", "OT"], "description": "Current period (default: unchanged)" }
                }
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let opponent = optional_str(&params, "opponent");
        let game_date = optional_str(&params, "gameDate")
            .map(parse_game_date)
            .transpose()?;
        let quarter = optional_str(&params, "quarter")
            .map(|q| q.parse::<Quarter>().map_err(TaggerError::InvalidQuarter))
            .transpose()?;

        let session = self.ctx.session(&params);
        let mut session = session.lock();
        let context = session.update_context(opponent, game_date, quarter)?;
        json_response(context)
    }
}
