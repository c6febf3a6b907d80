//! Tag event tool

use serde_json::{json, Value};

use crate::error::TaggerError;
use crate::protocol::{McpTool, Tool};
use crate::server::{json_response, optional_str, required_str};
use crate::session::TagRequest;
use crate::tools::ToolContext;
use crate::types::{McpResult, ShotResult};
use crate::utils::parse_timestamp;

/// Tool for recording one play outcome
pub struct TagEventTool {
    ctx: ToolContext,
}

impl TagEventTool {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }
}

impl Tool for TagEventTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "tag_event",
            "Record the outcome of a play. Omitted play/player fall back to the current selection",
            json!({
                "type": "object",
                "properties": {
                    "sessionId": { "type": "string", "description": "Session id (default: 'default')" },
                    "result": {
                        "type": "string",
                        "enum": ShotResult::ALL.map(ShotResult::as_str),
                        "description": "Outcome of the possession"
                    },
                    "play": { "type": "string", "description": "Play label from the playbook" },
                    "player": { "type": "string", "description": "Player name from the roster (optional)" },
                    "timestamp": { "type": "string", "description": "RFC 3339 time of the event (default: now)" },
                    "notes": { "type": "string", "description": "Free-text notes, up to 200 characters" }
                },
                "required": ["result"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let raw_result = required_str(&params, "result")?;
        let result: ShotResult = raw_result.parse().map_err(TaggerError::InvalidResult)?;

        let mut request = TagRequest::new(result);
        if let Some(play) = optional_str(&params, "play") {
            request = request.play(play);
        }
        if let Some(player) = optional_str(&params, "player") {
            request = request.player(player);
        }
        if let Some(raw) = optional_str(&params, "timestamp") {
            request = request.at(parse_timestamp(raw)?);
        }
        if let Some(notes) = optional_str(&params, "notes") {
            request = request.notes(notes);
        }

        let session = self.ctx.existing_session(&params)?;
        let event = session.lock().tag(request)?;
        json_response(&event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{context, text};

    fn ready_context() -> ToolContext {
        let ctx = context();
        {
            let session = ctx.session(&json!({}));
            let mut session = session.lock();
            session.set_context("Lakers", None, None).unwrap();
            session.add_play("PickAndRoll").unwrap();
            session.add_player("Smith").unwrap();
            session.start_tagging().unwrap();
        }
        ctx
    }

    #[test]
    fn test_tag_event() {
        let tool = TagEventTool::new(ready_context());
        let response = tool
            .execute(json!({
                "play": "pickandroll",
                "player": "Smith",
                "result": "Made 3",
                "timestamp": "2024-01-12T19:30:00Z",
                "notes": "corner"
            }))
            .unwrap();

        let event: Value = serde_json::from_str(text(&response)).unwrap();
        assert_eq!(event["sequence"], 1);
        assert_eq!(event["play"], "PickAndRoll");
        assert_eq!(event["result"], "Made 3");
        assert_eq!(event["points"], 3);
        assert_eq!(event["timestamp"], "2024-01-12T19:30:00Z");
        assert_eq!(event["notes"], "corner");
    }

    #[test]
    fn test_schema_lists_taggable_results() {
        let definition = TagEventTool::new(context()).definition();
        assert_eq!(
            definition.input_schema["properties"]["result"]["enum"],
            json!(["Made 2", "Made 3", "Missed 2", "Missed 3", "Foul"])
        );
    }

    #[test]
    fn test_tag_event_rejects_bad_input() {
        let tool = TagEventTool::new(ready_context());

        let err = tool
            .execute(json!({ "play": "PickAndRoll", "result": "Dunk" }))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid result 'Dunk'"));

        let err = tool
            .execute(json!({ "play": "Flex", "result": "Foul" }))
            .unwrap_err();
        assert!(err.to_string().contains("not in the playbook"));

        let err = tool.execute(json!({ "result": "Foul" })).unwrap_err();
        assert_eq!(err.to_string(), "No play selected");

        let err = tool
            .execute(json!({ "play": "PickAndRoll", "result": "Foul", "timestamp": "yesterday" }))
            .unwrap_err();
        assert!(err.to_string().contains("Invalid timestamp"));
    }

    #[test]
    fn test_tag_event_requires_started_session() {
        let tool = TagEventTool::new(context());
        let err = tool
            .execute(json!({ "play": "Horns", "result": "Made 2" }))
            .unwrap_err();
        assert!(err.to_string().contains("not been started"));
    }
}
