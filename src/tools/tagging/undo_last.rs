//! Undo last tool

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::{json_response, text_response};
use crate::tools::ToolContext;
use crate::types::McpResult;

/// Tool for removing the most recent event
pub struct UndoLastTool {
    ctx: ToolContext,
}

impl UndoLastTool {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }
}

impl Tool for UndoLastTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "undo_last",
            "Remove the most recently tagged event and return it",
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
        let removed = session.lock().undo();
        match removed {
            Some(event) => json_response(&event),
            None => Ok(text_response("Nothing to undo".to_string())),
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
    fn test_undo_last() {
        let ctx = context();
        let tool = UndoLastTool::new(ctx.clone());
        assert_eq!(text(&tool.execute(json!({})).unwrap()), "Nothing to undo");

        {
            let session = ctx.session(&json!({}));
            let mut session = session.lock();
            session.set_context("Lakers", None, None).unwrap();
            session.add_play("Horns").unwrap();
            session.start_tagging().unwrap();
            session.tag(TagRequest::new(ShotResult::Made2).play("Horns")).unwrap();
        }

        let response = tool.execute(json!({})).unwrap();
        let event: Value = serde_json::from_str(text(&response)).unwrap();
        assert_eq!(event["play"], "Horns");
        assert!(ctx.session(&json!({})).lock().log().is_empty());
    }
}
