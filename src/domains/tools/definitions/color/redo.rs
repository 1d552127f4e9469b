//! Color redo tool definition.
//!
//! Steps the workspace forward one snapshot. A no-op at the end of history.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::color::ColorWorkspace;
use crate::domains::tools::definitions::common::structured_result;

/// The redo tool takes no parameters.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ColorRedoParams {}

/// Color redo tool - reapply an undone workspace color change.
pub struct ColorRedoTool;

impl ColorRedoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "color_redo";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Redo a previously undone workspace color change. Does nothing if there is no later snapshot.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all)]
    pub fn execute(workspace: &ColorWorkspace) -> CallToolResult {
        info!("Color redo tool called");

        let outcome = workspace.redo();
        let summary = if outcome.moved {
            format!("Redid change: workspace color is {}", outcome.color.hex)
        } else {
            format!("Nothing to redo: workspace color stays {}", outcome.color.hex)
        };
        structured_result(&summary, &outcome.color)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        _arguments: serde_json::Value,
        workspace: Arc<ColorWorkspace>,
    ) -> Result<serde_json::Value, String> {
        info!("Color redo tool (HTTP) called");

        let result = Self::execute(&workspace);

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
            input_schema: cached_schema_for_type::<ColorRedoParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let workspace = workspace.clone();
            async move { Ok(Self::execute(&workspace)) }.boxed()
        })
    }
}
