//! Color transform tool definition.
//!
//! Derives a new workspace color from the current one: random, invert,
//! lighten or darken.

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

use crate::domains::color::{Color, ColorWorkspace};
use crate::domains::tools::definitions::common::structured_result;

/// Lightness step used by lighten/darken, in percent points.
const LIGHTNESS_STEP: i16 = 10;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Available transform actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransformAction {
    /// Replace with a uniformly random color.
    Random,
    /// Channel-wise complement.
    Invert,
    /// Raise HSL lightness by ten percent points.
    Lighten,
    /// Lower HSL lightness by ten percent points.
    Darken,
}

/// Parameters for the color transform tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ColorTransformParams {
    /// The transform to apply: "random", "invert", "lighten" or "darken".
    pub action: TransformAction,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Color transform tool - derive and commit a new color from the current one.
pub struct ColorTransformTool;

impl ColorTransformTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "color_transform";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Transform the current workspace color: 'random' picks a random color, 'invert' complements each RGB channel, 'lighten'/'darken' shift HSL lightness by 10 points. The change is undoable.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(action = ?params.action))]
    pub fn execute(params: &ColorTransformParams, workspace: &ColorWorkspace) -> CallToolResult {
        info!("Color transform tool called");

        let current = workspace.current();
        let next = match params.action {
            TransformAction::Random => Color::random(),
            TransformAction::Invert => current.inverted(),
            TransformAction::Lighten => current.adjust_lightness(LIGHTNESS_STEP),
            TransformAction::Darken => current.adjust_lightness(-LIGHTNESS_STEP),
        };

        let committed = workspace.commit(next);
        let summary = format!(
            "Applied {:?} to {}: workspace color is now {}",
            params.action, current.hex, committed.hex
        );
        structured_result(&summary, &committed)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        workspace: Arc<ColorWorkspace>,
    ) -> Result<serde_json::Value, String> {
        let action = match arguments.get("action").and_then(|v| v.as_str()) {
            Some("random") => TransformAction::Random,
            Some("invert") => TransformAction::Invert,
            Some("lighten") => TransformAction::Lighten,
            Some("darken") => TransformAction::Darken,
            Some(other) => return Err(format!("Invalid 'action' parameter: {}", other)),
            None => return Err("Missing or invalid 'action' parameter".to_string()),
        };

        info!("Color transform tool (HTTP) called");

        let params = ColorTransformParams { action };
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
            input_schema: cached_schema_for_type::<ColorTransformParams>(),
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
                let params: ColorTransformParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &workspace))
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
    use crate::core::config::ColorConfig;

    fn workspace() -> ColorWorkspace {
        ColorWorkspace::new(&ColorConfig::default())
    }

    #[test]
    fn test_invert_commits_complement() {
        let ws = workspace();
        ws.commit(Color::from_hex("#000000").unwrap());

        let params = ColorTransformParams {
            action: TransformAction::Invert,
        };
        let result = ColorTransformTool::execute(&params, &ws);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert_eq!(ws.current().hex, "#ffffff");
    }

    #[test]
    fn test_lighten_and_darken_step_lightness() {
        let ws = workspace();
        ws.commit(Color::from_hsl(200, 50, 50).unwrap());

        ColorTransformTool::execute(
            &ColorTransformParams {
                action: TransformAction::Lighten,
            },
            &ws,
        );
        assert_eq!(ws.current().hsl.l, 60);

        ColorTransformTool::execute(
            &ColorTransformParams {
                action: TransformAction::Darken,
            },
            &ws,
        );
        assert_eq!(ws.current().hsl.l, 50);
    }

    #[test]
    fn test_random_changes_history() {
        let ws = workspace();
        let before = ws.current();

        ColorTransformTool::execute(
            &ColorTransformParams {
                action: TransformAction::Random,
            },
            &ws,
        );

        // The committed color is undoable back to the seed.
        let outcome = ws.undo();
        assert!(outcome.moved);
        assert_eq!(outcome.color, before);
    }

    #[test]
    fn test_transform_is_undoable() {
        let ws = workspace();
        ws.commit(Color::from_hex("#336699").unwrap());

        ColorTransformTool::execute(
            &ColorTransformParams {
                action: TransformAction::Invert,
            },
            &ws,
        );
        assert_eq!(ws.current().hex, "#cc9966");

        let outcome = ws.undo();
        assert!(outcome.moved);
        assert_eq!(outcome.color.hex, "#336699");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_invalid_action() {
        let ws = Arc::new(workspace());
        let args = serde_json::json!({ "action": "sepia" });

        let result = ColorTransformTool::http_handler(args, ws);
        assert!(result.is_err());
    }
}
