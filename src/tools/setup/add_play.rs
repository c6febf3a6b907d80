//! Add play tool

use serde_json::{json, Value};

use crate::protocol::{McpTool, Tool};
use crate::server::{required_str, text_response};
use crate::tools::ToolContext;
use crate::types::McpResult;

/// Tool for adding a play label to the playbook
pub struct AddPlayTool {
    ctx: ToolContext,
}

impl AddPlayTool {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }
}

impl Tool for AddPlayTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "add_play",
            "Add a play to the playbook. Labels are unique ignoring case",
            json!({
                "type": "object",
                "properties": {
                    "sessionId": { "type": "string", "description": "Session id (default: 'default')" },
                    "play": { "type": "string", "description": "Play label, e.g. 'PickAndRoll'" }
                },
                "required": ["play"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let label = required_str(&params, "play")?;
        let session = self.ctx.session(&params);
        let mut session = session.lock();
        let added = session.add_play(label)?;
        Ok(text_response(format!(
            "Added play '{}' ({} in playbook)",
            added,
            session.playbook().plays().len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{context, text};

    #[test]
    fn test_add_play() {
        let tool = AddPlayTool::new(context());
        let response = tool.execute(json!({ "play": " Horns " })).unwrap();
        assert_eq!(text(&response), "Added play 'Horns' (1 in playbook)");
        assert!(tool.execute(json!({ "play": "horns" })).is_err());
        assert!(tool.execute(json!({ "play": "" })).is_err());
    }
}
