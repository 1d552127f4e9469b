//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::Config;
use crate::domains::color::ColorWorkspace;

use super::definitions::{
    Base64ConvertTool, ColorConvertTool, ColorRecentTool, ColorRedoTool, ColorSetTool,
    ColorTransformTool, ColorUndoTool, JsonFormatTool, QrGenerateTool, TimestampConvertTool,
    UrlConvertTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    config: Arc<Config>,
    workspace: Arc<ColorWorkspace>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>, workspace: Arc<ColorWorkspace>) -> Self {
        Self { config, workspace }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            JsonFormatTool::NAME,
            Base64ConvertTool::NAME,
            UrlConvertTool::NAME,
            TimestampConvertTool::NAME,
            ColorConvertTool::NAME,
            ColorSetTool::NAME,
            ColorTransformTool::NAME,
            ColorUndoTool::NAME,
            ColorRedoTool::NAME,
            ColorRecentTool::NAME,
            QrGenerateTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            JsonFormatTool::to_tool(),
            Base64ConvertTool::to_tool(),
            UrlConvertTool::to_tool(),
            TimestampConvertTool::to_tool(),
            ColorConvertTool::to_tool(),
            ColorSetTool::to_tool(),
            ColorTransformTool::to_tool(),
            ColorUndoTool::to_tool(),
            ColorRedoTool::to_tool(),
            ColorRecentTool::to_tool(),
            QrGenerateTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            JsonFormatTool::NAME => JsonFormatTool::http_handler(arguments),
            Base64ConvertTool::NAME => Base64ConvertTool::http_handler(arguments),
            UrlConvertTool::NAME => UrlConvertTool::http_handler(arguments),
            TimestampConvertTool::NAME => TimestampConvertTool::http_handler(arguments),
            ColorConvertTool::NAME => ColorConvertTool::http_handler(arguments),
            ColorSetTool::NAME => ColorSetTool::http_handler(arguments, self.workspace.clone()),
            ColorTransformTool::NAME => {
                ColorTransformTool::http_handler(arguments, self.workspace.clone())
            }
            ColorUndoTool::NAME => ColorUndoTool::http_handler(arguments, self.workspace.clone()),
            ColorRedoTool::NAME => ColorRedoTool::http_handler(arguments, self.workspace.clone()),
            ColorRecentTool::NAME => {
                ColorRecentTool::http_handler(arguments, self.workspace.clone())
            }
            QrGenerateTool::NAME => QrGenerateTool::http_handler(arguments, self.config.clone()),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}
