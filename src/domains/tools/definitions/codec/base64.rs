//! Base64 convert tool definition.
//!
//! Encodes UTF-8 text to standard Base64 and decodes it back.

use base64::{Engine, engine::general_purpose::STANDARD};
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

/// Conversion direction for the Base64 tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Base64Mode {
    /// Encode UTF-8 text to Base64.
    #[default]
    Encode,
    /// Decode Base64 back to UTF-8 text.
    Decode,
}

/// Parameters for the Base64 convert tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Base64ConvertParams {
    /// The text to encode or decode.
    pub input: String,

    /// Conversion direction: "encode" (default) or "decode".
    #[serde(default)]
    pub mode: Base64Mode,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Base64 convert tool - standard-alphabet encode/decode of UTF-8 text.
pub struct Base64ConvertTool;

impl Base64ConvertTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "base64_convert";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Encode UTF-8 text to standard Base64, or decode Base64 back to UTF-8 text.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(mode = ?params.mode))]
    pub fn execute(params: &Base64ConvertParams) -> CallToolResult {
        info!("Base64 convert tool called");

        match params.mode {
            Base64Mode::Encode => success_result(STANDARD.encode(params.input.as_bytes())),
            Base64Mode::Decode => {
                let bytes = match STANDARD.decode(params.input.trim()) {
                    Ok(b) => b,
                    Err(e) => return error_result(&format!("Invalid Base64 input: {}", e)),
                };
                match String::from_utf8(bytes) {
                    Ok(text) => success_result(text),
                    Err(e) => {
                        error_result(&format!("Decoded bytes are not valid UTF-8: {}", e))
                    }
                }
            }
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
            Some("decode") => Base64Mode::Decode,
            Some("encode") | None => Base64Mode::Encode,
            Some(other) => return Err(format!("Invalid 'mode' parameter: {}", other)),
        };

        info!("Base64 convert tool (HTTP) called");

        let params = Base64ConvertParams { input, mode };
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
            input_schema: cached_schema_for_type::<Base64ConvertParams>(),
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
                let params: Base64ConvertParams =
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
