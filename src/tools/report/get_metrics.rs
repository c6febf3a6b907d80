//! Get metrics tool

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::{json_response, optional_str};
use crate::tools::ToolContext;
use crate::types::McpResult;

/// Tool for computing the efficiency table from the current log
pub struct GetMetricsTool {
    ctx: ToolContext,
}

impl GetMetricsTool {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }
}

impl Tool for GetMetricsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "get_metrics",
            "Per-play efficiency (points per attempt, frequency, success rate), best plays first",
            json!({
                "type": "object",
                "properties": {
                    "sessionId": { "type": "string", "description": "Session id (default: 'default')" },
                    "groupBy": {
                        "type": "string",
                        "enum": ["play", "player", "all"],
                        "description": "Table to compute (default: 'play'). 'all' adds per-player rows and totals"
                    }
                }
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let session = self.ctx.existing_session(&params)?;
        let session = session.lock();

        match optional_str(&params, "groupBy").unwrap_or("play") {
            "play" => json_response(&session.metrics()),
            "player" => json_response(&session.player_metrics()),
            "all" => json_response(&json!({
                "plays": session.metrics(),
                "players": session.player_metrics(),
                "totals": session.totals(),
            })),
            other => Err(format!("Unknown groupBy '{}', expected play, player or all", other).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::TagRequest;
    use crate::tools::test_support::{context, text};
    use crate::types::ShotResult;

    #[test]
    fn test_get_metrics_orders_by_efficiency() {
        let ctx = context();
        {
            let session = ctx.session(&json!({}));
            let mut session = session.lock();
            session.set_context("Lakers", None, None).unwrap();
            session.add_play("PickAndRoll").unwrap();
            session.add_play("Isolation").unwrap();
            session.add_player("Smith").unwrap();
            session.start_tagging().unwrap();
            session.tag(TagRequest::new(ShotResult::Made2).play("PickAndRoll").player("Smith")).unwrap();
            session.tag(TagRequest::new(ShotResult::Missed3).play("PickAndRoll")).unwrap();
            session.tag(TagRequest::new(ShotResult::Made3).play("Isolation")).unwrap();
        }
        let tool = GetMetricsTool::new(ctx);

        let plays: Value = serde_json::from_str(text(&tool.execute(json!({})).unwrap())).unwrap();
        assert_eq!(plays[0]["play"], "Isolation");
        assert_eq!(plays[0]["pointsPerAttempt"], 3.0);
        assert_eq!(plays[1]["play"], "PickAndRoll");
        assert_eq!(plays[1]["successRate"], 0.5);

        let all: Value =
            serde_json::from_str(text(&tool.execute(json!({ "groupBy": "all" })).unwrap())).unwrap();
        assert_eq!(all["totals"]["events"], 3);
        assert_eq!(all["totals"]["points"], 5);
        assert_eq!(all["players"].as_array().unwrap().len(), 2);

        assert!(tool.execute(json!({ "groupBy": "quarter" })).is_err());
    }

    #[test]
    fn test_get_metrics_unknown_session_is_not_created() {
        let ctx = context();
        let tool = GetMetricsTool::new(ctx.clone());
        assert!(tool.execute(json!({ "sessionId": "typo" })).is_err());
        assert!(ctx.registry.is_empty());
    }

    #[test]
    fn test_get_metrics_empty() {
        let tool = GetMetricsTool::new(context());
        assert_eq!(text(&tool.execute(json!({})).unwrap()), "[]");
    }
}
