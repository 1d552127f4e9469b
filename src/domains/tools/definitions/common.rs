//! Common utilities shared across tool definitions.
//!
//! Response formatting and error handling helpers used by every tool.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a success result with a one-line summary followed by a
/// pretty-printed JSON payload.
pub fn structured_result<T: Serialize>(summary: &str, data: &T) -> CallToolResult {
    match serde_json::to_string_pretty(data) {
        Ok(json) => success_result(format!("{}\n\n{}", summary, json)),
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}

#[cfg(test)]
pub(crate) fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_result_flags_error() {
        let result = error_result("boom");
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "boom");
    }

    #[test]
    fn test_structured_result_contains_summary_and_json() {
        let result = structured_result("one entry", &serde_json::json!({ "a": 1 }));
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        let text = result_text(&result);
        assert!(text.starts_with("one entry"));
        assert!(text.contains("\"a\": 1"));
    }
}
