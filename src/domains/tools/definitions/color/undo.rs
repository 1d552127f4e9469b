//! Color undo tool definition.
//!
//! Steps the workspace back one snapshot. A no-op at the start of history.

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

/// The undo tool takes no parameters.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ColorUndoParams {}

/// Color undo tool - revert the last workspace color change.
pub struct ColorUndoTool;

impl ColorUndoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "color_undo";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Undo the last workspace color change. Does nothing if there is no earlier snapshot.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all)]
    pub fn execute(workspace: &ColorWorkspace) -> CallToolResult {
        info!("Color undo tool called");

        let outcome = workspace.undo();
        let summary = if outcome.moved {
            format!("Undid last change: workspace color is {}", outcome.color.hex)
        } else {
            format!("Nothing to undo: workspace color stays {}", outcome.color.hex)
        };
        structured_result(&summary, &outcome.color)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        _arguments: serde_json::Value,
        workspace: Arc<ColorWorkspace>,
    ) -> Result<serde_json::Value, String> {
        info!("Color undo tool (HTTP) called");

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
            input_schema: cached_schema_for_type::<ColorUndoParams>(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ColorConfig;
    use crate::domains::color::Color;
    use crate::domains::tools::definitions::common::result_text;

    fn workspace() -> ColorWorkspace {
        ColorWorkspace::new(&ColorConfig::default())
    }

    #[test]
    fn test_undo_restores_previous() {
        let ws = workspace();
        ws.commit(Color::from_hex("#ff0000").unwrap());

        let result = ColorUndoTool::execute(&ws);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert!(result_text(&result).starts_with("Undid last change"));
        assert_eq!(ws.current().hex, "#6366f1");
    }

    #[test]
    fn test_undo_at_start_is_noop() {
        let ws = workspace();

        let result = ColorUndoTool::execute(&ws);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert!(result_text(&result).starts_with("Nothing to undo"));
    }
}
