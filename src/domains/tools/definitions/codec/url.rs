//! URL convert tool definition.
//!
//! Percent-encodes text for safe use inside a URL component and decodes
//! percent-encoded text back to UTF-8.

use futures::FutureExt;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::{error_result, success_result};

/// Characters left untouched by component encoding, in addition to
/// alphanumerics: `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ============================================================================
// Tool Parameters
// ============================================================================

/// Conversion direction for the URL tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UrlMode {
    /// Percent-encode text as a URL component.
    #[default]
    Encode,
    /// Decode percent-encoded text back to UTF-8.
    Decode,
}

/// Parameters for the URL convert tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UrlConvertParams {
    /// The text to encode or decode.
    pub input: String,

    /// Conversion direction: "encode" (default) or "decode".
    #[serde(default)]
    pub mode: UrlMode,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// URL convert tool - percent-encoding for URL components.
pub struct UrlConvertTool;

impl UrlConvertTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "url_convert";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Percent-encode text for use as a URL component, or decode percent-encoded text back to UTF-8.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(mode = ?params.mode))]
    pub fn execute(params: &UrlConvertParams) -> CallToolResult {
        info!("URL convert tool called");

        match params.mode {
            UrlMode::Encode => {
                success_result(utf8_percent_encode(&params.input, COMPONENT).to_string())
            }
            UrlMode::Decode => match percent_decode_str(&params.input).decode_utf8() {
                Ok(text) => success_result(text.into_owned()),
                Err(e) => error_result(&format!("Decoded bytes are not valid UTF-8: {}", e)),
            },
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
            Some("decode") => UrlMode::Decode,
            Some("encode") | None => UrlMode::Encode,
            Some(other) => return Err(format!("Invalid 'mode' parameter: {}", other)),
        };

        info!("URL convert tool (HTTP) called");

        let params = UrlConvertParams { input, mode };
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
            input_schema: cached_schema_for_type::<UrlConvertParams>(),
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
                let params: UrlConvertParams =
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
    fn test_encode_reserved_characters() {
        let params = UrlConvertParams {
            input: "a b&c=d?e".to_string(),
            mode: UrlMode::Encode,
        };

        let result = UrlConvertTool::execute(&params);
        assert_eq!(result_text(&result), "a%20b%26c%3Dd%3Fe");
    }

    #[test]
    fn test_encode_keeps_unreserved_marks() {
        let params = UrlConvertParams {
            input: "a-b_c.d!e~f*g'h(i)j".to_string(),
            mode: UrlMode::Encode,
        };

        let result = UrlConvertTool::execute(&params);
        assert_eq!(result_text(&result), "a-b_c.d!e~f*g'h(i)j");
    }

    #[test]
    fn test_decode() {
        let params = UrlConvertParams {
            input: "hello%20world%21".to_string(),
            mode: UrlMode::Decode,
        };

        let result = UrlConvertTool::execute(&params);
        assert_eq!(result_text(&result), "hello world!");
    }

    #[test]
    fn test_encode_unicode_round_trip() {
        let encoded = UrlConvertTool::execute(&UrlConvertParams {
            input: "café ✓".to_string(),
            mode: UrlMode::Encode,
        });
        let encoded_text = result_text(&encoded).to_string();
        assert!(encoded_text.contains('%'));

        let decoded = UrlConvertTool::execute(&UrlConvertParams {
            input: encoded_text,
            mode: UrlMode::Decode,
        });
        assert_eq!(result_text(&decoded), "café ✓");
    }

    #[test]
    fn test_decode_invalid_utf8_is_error() {
        let params = UrlConvertParams {
            input: "%ff%fe".to_string(),
            mode: UrlMode::Decode,
        };

        let result = UrlConvertTool::execute(&params);
        assert!(result.is_error.unwrap_or(false));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler() {
        let args = serde_json::json!({
            "input": "a b",
            "mode": "encode"
        });

        let result = UrlConvertTool::http_handler(args);
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_missing_input() {
        let args = serde_json::json!({});

        let result = UrlConvertTool::http_handler(args);
        assert!(result.is_err());
    }
}
