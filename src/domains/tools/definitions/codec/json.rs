//! JSON format tool definition.
//!
//! Pretty-prints or minifies a JSON document after validating it.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::{error_result, success_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Output mode for the JSON tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum JsonMode {
    /// Pretty-print with two-space indentation.
    #[default]
    Format,
    /// Strip all insignificant whitespace.
    Minify,
}

/// Parameters for the JSON format tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct JsonFormatParams {
    /// The JSON text to process.
    pub input: String,

    /// Output mode: "format" (default) or "minify".
    #[serde(default)]
    pub mode: JsonMode,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// JSON format tool - validates, pretty-prints, or minifies JSON text.
pub struct JsonFormatTool;

impl JsonFormatTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "json_format";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Validate and reformat JSON text. Mode 'format' pretty-prints with two-space indentation, mode 'minify' strips all whitespace.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(mode = ?params.mode))]
    pub fn execute(params: &JsonFormatParams) -> CallToolResult {
        info!("JSON format tool called");

        if params.input.trim().is_empty() {
            return error_result("Input is empty: provide JSON text to process");
        }

        let value: serde_json::Value = match serde_json::from_str(&params.input) {
            Ok(v) => v,
            Err(e) => return error_result(&format!("Invalid JSON: {}", e)),
        };

        let rendered = match params.mode {
            JsonMode::Format => serde_json::to_string_pretty(&value),
            JsonMode::Minify => serde_json::to_string(&value),
        };

        match rendered {
            Ok(text) => success_result(text),
            Err(e) => error_result(&format!("Failed to render JSON: {}", e)),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let input = arguments
            .get("input")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'input' parameter".to_string())?
            .to_string();

        let mode = match arguments.get("mode").and_then(|v| v.as_str()) {
            Some("minify") => JsonMode::Minify,
            Some("format") | None => JsonMode::Format,
            Some(other) => return Err(format!("Invalid 'mode' parameter: {}", other)),
        };

        info!("JSON format tool (HTTP) called");

        let params = JsonFormatParams { input, mode };
        let result = Self::execute(&params);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<JsonFormatParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: JsonFormatParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_format_pretty_prints() {
        let params = JsonFormatParams {
            input: "{\"a\":1}".to_string(),
            mode: JsonMode::Format,
        };

        let result = JsonFormatTool::execute(&params);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert_eq!(result_text(&result), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_minify_strips_whitespace() {
        let params = JsonFormatParams {
            input: "{\n  \"a\": 1,\n  \"b\": [1, 2]\n}".to_string(),
            mode: JsonMode::Minify,
        };

        let result = JsonFormatTool::execute(&params);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert_eq!(result_text(&result), "{\"a\":1,\"b\":[1,2]}");
    }

    #[test]
    fn test_object_key_order_preserved() {
        let params = JsonFormatParams {
            input: "{\"b\":1,\"a\":2}".to_string(),
            mode: JsonMode::Minify,
        };
        let result = JsonFormatTool::execute(&params);
        assert_eq!(result_text(&result), "{\"b\":1,\"a\":2}");

        let params = JsonFormatParams {
            input: "{\"b\":1,\"a\":2}".to_string(),
            mode: JsonMode::Format,
        };
        let result = JsonFormatTool::execute(&params);
        assert_eq!(result_text(&result), "{\n  \"b\": 1,\n  \"a\": 2\n}");
    }

    #[test]
    fn test_invalid_json_is_error() {
        let params = JsonFormatParams {
            input: "{\"a\":}".to_string(),
            mode: JsonMode::Format,
        };

        let result = JsonFormatTool::execute(&params);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("Invalid JSON"));
    }

    #[test]
    fn test_empty_input_is_error() {
        let params = JsonFormatParams {
            input: "   ".to_string(),
            mode: JsonMode::Format,
        };

        let result = JsonFormatTool::execute(&params);
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_mode_defaults_to_format() {
        let params: JsonFormatParams = serde_json::from_value(serde_json::json!({
            "input": "[1,2]"
        }))
        .unwrap();
        assert_eq!(params.mode, JsonMode::Format);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler() {
        let args = serde_json::json!({
            "input": "{\"key\": \"value\"}",
            "mode": "minify"
        });

        let result = JsonFormatTool::http_handler(args);
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_missing_input() {
        let args = serde_json::json!({ "mode": "format" });

        let result = JsonFormatTool::http_handler(args);
        assert!(result.is_err());
    }
}
