//! Helpers shared by tool implementations
//!
//! Argument extraction and MCP content builders.

use serde::Serialize;
use serde_json::{json, Value};

use crate::session::DEFAULT_SESSION_ID;
use crate::types::McpResult;

/// Extract tool arguments from params
pub fn extract_arguments(params: &Value) -> Value {
    params
        .get("arguments")
        .cloned()
        .unwrap_or(Value::Object(serde_json::Map::new()))
}

/// Extract tool name from params
pub fn extract_tool_name(params: &Value) -> Option<&str> {
    params.get("name").and_then(|v| v.as_str())
}

/// Session named by the `sessionId` argument, or the default session
pub fn session_id(args: &Value) -> &str {
    optional_str(args, "sessionId").unwrap_or(DEFAULT_SESSION_ID)
}

/// Non-empty string argument
pub fn optional_str<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
}

/// Required string argument
pub fn required_str<'a>(args: &'a Value, key: &str) -> McpResult<&'a str> {
    optional_str(args, key).ok_or_else(|| format!("Missing required argument '{}'", key).into())
}

/// Required unsigned integer argument
pub fn required_u32(args: &Value, key: &str) -> McpResult<u32> {
    args.get(key)
        .and_then(|v| v.as_u64())
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| format!("Missing or invalid argument '{}'", key).into())
}

/// Build a text content response
pub fn text_response(text: String) -> Value {
    json!({
        "content": [{
            "type": "text",
            "text": text
        }]
    })
}

/// Build a text content response holding pretty JSON
pub fn json_response<T: Serialize + ?Sized>(value: &T) -> McpResult<Value> {
    Ok(text_response(serde_json::to_string_pretty(value)?))
}
