//! Timestamp convert tool definition.
//!
//! Converts between Unix timestamps and human-readable UTC datetimes.

use chrono::{DateTime, NaiveDateTime, Utc};
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domains::tools::definitions::common::{error_result, structured_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the timestamp convert tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TimestampConvertParams {
    /// A Unix timestamp (seconds or milliseconds) or a datetime string.
    /// Omit to use the current time.
    #[serde(default)]
    pub value: Option<String>,
}

/// All representations of a single instant, serialized into the response.
#[derive(Debug, Clone, Serialize)]
pub struct TimestampReport {
    /// The input that was interpreted, or "now".
    pub input: String,
    /// Unix timestamp in seconds.
    pub unix_seconds: i64,
    /// Unix timestamp in milliseconds.
    pub unix_millis: i64,
    /// RFC 3339 representation in UTC.
    pub utc_rfc3339: String,
    /// Human-readable UTC datetime (YYYY-MM-DD HH:MM:SS).
    pub utc_readable: String,
}

impl TimestampReport {
    fn new(input: String, instant: DateTime<Utc>) -> Self {
        Self {
            input,
            unix_seconds: instant.timestamp(),
            unix_millis: instant.timestamp_millis(),
            utc_rfc3339: instant.to_rfc3339(),
            utc_readable: instant.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Timestamp convert tool - Unix timestamps to UTC datetimes and back.
pub struct TimestampConvertTool;

impl TimestampConvertTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "timestamp_convert";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Convert a Unix timestamp (seconds or milliseconds) or a datetime string (RFC 3339 or 'YYYY-MM-DD HH:MM:SS') to all common representations. Omit the value to use the current time.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all)]
    pub fn execute(params: &TimestampConvertParams) -> CallToolResult {
        info!("Timestamp convert tool called");

        let value = params.value.as_deref().map(str::trim).unwrap_or("");

        if value.is_empty() {
            let report = TimestampReport::new("now".to_string(), Utc::now());
            return structured_result("Current time", &report);
        }

        match interpret(value) {
            Ok(instant) => {
                let report = TimestampReport::new(value.to_string(), instant);
                structured_result(&format!("Interpreted '{}'", value), &report)
            }
            Err(e) => error_result(&e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let value = arguments
            .get("value")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        info!("Timestamp convert tool (HTTP) called");

        let params = TimestampConvertParams { value };
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
            input_schema: cached_schema_for_type::<TimestampConvertParams>(),
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
                let params: TimestampConvertParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Interpret a non-empty input as a timestamp or a datetime string.
///
/// Numeric inputs with exactly ten digits are treated as seconds, longer
/// ones as milliseconds. Text inputs are tried as RFC 3339, then as
/// 'YYYY-MM-DD HH:MM:SS' (assumed UTC).
fn interpret(value: &str) -> Result<DateTime<Utc>, String> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        let number: i64 = value
            .parse()
            .map_err(|_| format!("Timestamp out of range: {}", value))?;
        let instant = if digits.len() <= 10 {
            DateTime::from_timestamp(number, 0)
        } else {
            DateTime::from_timestamp_millis(number)
        };
        return instant.ok_or_else(|| format!("Timestamp out of range: {}", value));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d"] {
        if format == "%Y-%m-%d" {
            if let Ok(date) = chrono::NaiveDate::parse_from_str(value, format)
                && let Some(midnight) = date.and_hms_opt(0, 0, 0)
            {
                return Ok(midnight.and_utc());
            }
        } else if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed.and_utc());
        }
    }

    Err(format!(
        "Could not interpret '{}' as a timestamp or datetime. Use a Unix timestamp, RFC 3339, or 'YYYY-MM-DD HH:MM:SS'.",
        value
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_seconds_timestamp() {
        let params = TimestampConvertParams {
            value: Some("1700000000".to_string()),
        };

        let result = TimestampConvertTool::execute(&params);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        let text = result_text(&result);
        assert!(text.contains("\"unix_seconds\": 1700000000"));
        assert!(text.contains("2023-11-14 22:13:20"));
    }

    #[test]
    fn test_millisecond_timestamp() {
        let params = TimestampConvertParams {
            value: Some("1700000000000".to_string()),
        };

        let result = TimestampConvertTool::execute(&params);
        let text = result_text(&result);
        assert!(text.contains("\"unix_seconds\": 1700000000"));
        assert!(text.contains("\"unix_millis\": 1700000000000"));
    }

    #[test]
    fn test_datetime_string() {
        let params = TimestampConvertParams {
            value: Some("2023-11-14 22:13:20".to_string()),
        };

        let result = TimestampConvertTool::execute(&params);
        let text = result_text(&result);
        assert!(text.contains("\"unix_seconds\": 1700000000"));
    }

    #[test]
    fn test_rfc3339_with_offset() {
        let params = TimestampConvertParams {
            value: Some("2023-11-15T00:13:20+02:00".to_string()),
        };

        let result = TimestampConvertTool::execute(&params);
        let text = result_text(&result);
        assert!(text.contains("\"unix_seconds\": 1700000000"));
    }

    #[test]
    fn test_date_only() {
        let params = TimestampConvertParams {
            value: Some("1970-01-02".to_string()),
        };

        let result = TimestampConvertTool::execute(&params);
        let text = result_text(&result);
        assert!(text.contains("\"unix_seconds\": 86400"));
    }

    #[test]
    fn test_missing_value_uses_now() {
        let params = TimestampConvertParams { value: None };

        let result = TimestampConvertTool::execute(&params);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert!(result_text(&result).starts_with("Current time"));
    }

    #[test]
    fn test_garbage_is_error() {
        let params = TimestampConvertParams {
            value: Some("next tuesday".to_string()),
        };

        let result = TimestampConvertTool::execute(&params);
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_negative_seconds() {
        let instant = interpret("-86400").unwrap();
        assert_eq!(instant.timestamp(), -86400);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler() {
        let args = serde_json::json!({ "value": "1700000000" });

        let result = TimestampConvertTool::http_handler(args);
        assert!(result.is_ok());
    }
}
