//! MCP Server implementation
//!
//! Line-delimited JSON-RPC over any reader/writer pair; `McpServer::new`
//! binds it to stdin/stdout.

mod handlers;

use std::collections::BTreeMap;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpTool, ServerInfo, Tool, PROTOCOL_VERSION,
};
use crate::types::McpResult;

pub use handlers::*;

/// MCP Server that handles JSON-RPC communication
pub struct McpServer<R = BufReader<io::Stdin>, W = BufWriter<io::Stdout>> {
    server_info: ServerInfo,
    tools: BTreeMap<String, Box<dyn Tool>>,
    reader: R,
    writer: W,
}

impl McpServer {
    /// Create a stdio server with default settings
    pub fn new() -> Self {
        Self::with_info(ServerInfo::default())
    }

    /// Create a stdio server with custom server info
    pub fn with_info(info: ServerInfo) -> Self {
        Self::with_io(info, BufReader::new(io::stdin()), BufWriter::new(io::stdout()))
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> McpServer<R, W> {
    /// Create a server over an arbitrary reader/writer pair
    pub fn with_io(info: ServerInfo, reader: R, writer: W) -> Self {
        Self {
            server_info: info,
            tools: BTreeMap::new(),
            reader,
            writer,
        }
    }

    /// Register a tool with the server
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> &mut Self {
        let name = tool.definition().name;
        self.tools.insert(name, tool);
        self
    }

    /// Get the number of registered tools
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Serve until the reader is exhausted
    pub fn run(&mut self) -> McpResult<()> {
        let mut line = String::new();
        while self.reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                if let Some(response) = self.handle_message(trimmed)? {
                    writeln!(self.writer, "{}", response)?;
                    self.writer.flush()?;
                }
            }
            line.clear();
        }
        debug!("input closed, server stopping");
        Ok(())
    }

    /// Handle one JSON-RPC message, returning the serialized response
    ///
    /// Notifications produce no response.
    pub fn handle_message(&self, raw: &str) -> McpResult<Option<String>> {
        let request: JsonRpcRequest = match serde_json::from_str(raw) {
            Ok(req) => req,
            Err(e) => return encode(&JsonRpcError::parse_error(e.to_string())).map(Some),
        };

        if !request.is_valid() {
            let id = request.id.unwrap_or(Value::Null);
            return encode(&JsonRpcError::invalid_request(id, "jsonrpc must be '2.0'")).map(Some);
        }

        let is_notification = request.is_notification();
        let id = request.id.clone().unwrap_or(Value::Null);

        let outcome = match request.method.as_str() {
            "initialize" => Ok(self.initialize_result()),
            "notifications/initialized" => return Ok(None),
            "tools/list" => Ok(self.tools_list_result()),
            "tools/call" => self.call_tool(id.clone(), request.params),
            "ping" => Ok(json!({})),
            method => Err(JsonRpcError::method_not_found(id.clone(), method)),
        };

        if is_notification {
            return Ok(None);
        }

        match outcome {
            Ok(result) => encode(&JsonRpcResponse::new(id, result)).map(Some),
            Err(error) => encode(&error).map(Some),
        }
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version
            }
        })
    }

    fn tools_list_result(&self) -> Value {
        let tools: Vec<McpTool> = self.tools.values().map(|t| t.definition()).collect();
        json!({ "tools": tools })
    }

    fn call_tool(&self, id: Value, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params = params.ok_or_else(|| JsonRpcError::invalid_params(id.clone(), "missing params"))?;
        let tool_name = extract_tool_name(&params)
            .ok_or_else(|| JsonRpcError::invalid_params(id.clone(), "missing tool name"))?;

        let tool = self
            .tools
            .get(tool_name)
            .ok_or_else(|| JsonRpcError::unknown_tool(id.clone(), tool_name))?;

        debug!(tool = tool_name, "tool call");
        tool.execute(extract_arguments(&params)).map_err(|e| {
            warn!(tool = tool_name, error = %e, "tool failed");
            JsonRpcError::tool_failed(id, e.to_string())
        })
    }
}

fn encode<T: Serialize>(message: &T) -> McpResult<String> {
    Ok(serde_json::to_string(message)?)
}
