//! Color recent tool definition.
//!
//! Lists or clears the workspace's most-recently-used colors.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::color::ColorWorkspace;
use crate::domains::tools::definitions::common::{structured_result, success_result};

/// Parameters for the color recent tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ColorRecentParams {
    /// Clear the recent list instead of listing it.
    #[serde(default)]
    pub clear: bool,
}

/// Color recent tool - the bounded most-recently-used color list.
pub struct ColorRecentTool;

impl ColorRecentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "color_recent";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List the most recently used workspace colors (newest first), or clear the list with 'clear': true. Clearing does not affect undo history.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(clear = params.clear))]
    pub fn execute(params: &ColorRecentParams, workspace: &ColorWorkspace) -> CallToolResult {
        info!("Color recent tool called");

        if params.clear {
            workspace.clear_recent();
            return success_result("Recent colors cleared".to_string());
        }

        let recent = workspace.recent();
        let summary = match recent.len() {
            0 => "No recent colors".to_string(),
            1 => "1 recent color".to_string(),
            n => format!("{} recent colors", n),
        };
        structured_result(&summary, &serde_json::json!({ "recent": recent }))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        workspace: Arc<ColorWorkspace>,
    ) -> Result<serde_json::Value, String> {
        let clear = arguments
            .get("clear")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        info!("Color recent tool (HTTP) called");

        let params = ColorRecentParams { clear };
        let result = Self::execute(&params, &workspace);

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
            input_schema: cached_schema_for_type::<ColorRecentParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(workspace: Arc<ColorWorkspace>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let workspace = workspace.clone();
            async move {
                let params: ColorRecentParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &workspace))
            }
            .boxed()
        })
    }
}
