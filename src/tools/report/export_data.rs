//! Export data tool

use serde_json::{json, Value};

use crate::event_log::export::{render, save_export};
use crate::event_log::ExportKind;
use crate::protocol::{McpTool, Tool};
use crate::server::{required_str, text_response};
use crate::tools::ToolContext;
use crate::types::McpResult;

/// Tool for rendering the log or the metrics table as CSV/JSON
pub struct ExportDataTool {
    ctx: ToolContext,
}

impl ExportDataTool {
    pub fn new(ctx: ToolContext) -> Self {
        Self { ctx }
    }
}

impl Tool for ExportDataTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "export_data",
            "Export the event log or metrics table. With save=true the file is written to the export directory",
            json!({
                "type": "object",
                "properties": {
                    "sessionId": { "type": "string", "description": "Session id (default: 'default')" },
                    "kind": {
                        "type": "string",
                        "enum": ["events.csv", "metrics.csv", "events.json", "metrics.json"],
                        "description": "What to export"
                    },
                    "save": { "type": "boolean", "description": "Write to a local file instead of returning the content", "default": false }
                },
                "required": ["kind"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let raw_kind = required_str(&params, "kind")?;
        let kind = ExportKind::parse(raw_kind)
            .ok_or_else(|| format!("Unknown export kind '{}'", raw_kind))?;
        let save = params.get("save").and_then(|v| v.as_bool()).unwrap_or(false);

        // Render from one snapshot so events and metrics agree
        let (events, metrics, game_date) = {
            let session = self.ctx.existing_session(&params)?;
            let session = session.lock();
            (session.snapshot(), session.metrics(), session.context().game_date)
        };
        let content = render(kind, &events, &metrics)?;

        if save {
            let path = save_export(self.ctx.config.export_dir(), &kind.file_name(game_date), &content)?;
            Ok(text_response(format!("Saved {}", path.display())))
        } else {
            Ok(text_response(content))
        }
    }
}
