//! Get events tool

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::json_response;
use crate::tools::ToolContext;
use crate::types::McpResult;

/// Tool for reading the event log in insertion order
pub struct GetEventsTool {
    ctx: ToolContext,
}

impl GetEventsTool {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }
}

impl Tool for GetEventsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "get_events",
            "List tagged events in the order they were recorded",
            json!({
                "type": "object",
                "properties": {
                    "sessionId": { "type": "string", "description": "Session id (default: 'default')" },
                    "last": { "type": "integer", "minimum": 1, "description": "Only return the most recent N events" }
                }
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let session = self.ctx.existing_session(&params)?;
        let events = session.lock().snapshot();

        let skip = match params.get("last").and_then(|v| v.as_u64()) {
            Some(n) => events.len().saturating_sub(n as usize),
            None => 0,
        };
        json_response(&events[skip..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::TagRequest;
    use crate::tools::test_support::{context, text};
    use crate::types::ShotResult;

    #[test]
    fn test_get_events_last() {
        let ctx = context();
        {
            let session = ctx.session(&json!({}));
            let mut session = session.lock();
            session.set_context("Lakers", None, None).unwrap();
            session.add_play("Horns").unwrap();
            session.start_tagging().unwrap();
            for result in [ShotResult::Made2, ShotResult::Missed3, ShotResult::Foul] {
                session.tag(TagRequest::new(result).play("Horns")).unwrap();
            }
        }
        let tool = GetEventsTool::new(ctx);

        let all: Value = serde_json::from_str(text(&tool.execute(json!({})).unwrap())).unwrap();
        assert_eq!(all.as_array().unwrap().len(), 3);

        let recent: Value =
            serde_json::from_str(text(&tool.execute(json!({ "last": 2 })).unwrap())).unwrap();
        assert_eq!(recent[0]["sequence"], 2);
        assert_eq!(recent[1]["result"], "Foul");
    }

    #[test]
    fn test_get_events_empty_default_session() {
        let tool = GetEventsTool::new(context());
        let response = tool.execute(json!({})).unwrap();
        assert_eq!(text(&response), "[]");
    }

    #[test]
    fn test_get_events_unknown_session() {
        let ctx = context();
        let tool = GetEventsTool::new(ctx.clone());

        let err = tool.execute(json!({ "sessionId": "gmae-7" })).unwrap_err();
        assert_eq!(err.to_string(), "Session 'gmae-7' not found");
        assert!(ctx.registry.get("gmae-7").is_err());
    }
}
