//! Color set tool definition.
//!
//! Commits a new color to the shared workspace, recording it in history
//! and the recent-colors list.

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

use super::convert::{HslInput, RgbInput, resolve_color};
use crate::domains::color::{Color, ColorError, ColorWorkspace, Rgb};
use crate::domains::tools::definitions::common::{error_result, structured_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// A single-channel edit applied on top of the current workspace color.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChannelInput {
    /// Which RGB channel to set: "r", "g" or "b".
    pub channel: String,
    /// New channel value, 0-255.
    pub value: i64,
}

/// Parameters for the color set tool. Exactly one input must be set.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ColorSetParams {
    /// A hex color such as "#6366f1".
    #[serde(default)]
    pub hex: Option<String>,

    /// RGB channels.
    #[serde(default)]
    pub rgb: Option<RgbInput>,

    /// HSL components.
    #[serde(default)]
    pub hsl: Option<HslInput>,

    /// Set a single RGB channel of the current color.
    #[serde(default)]
    pub channel: Option<ChannelInput>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Color set tool - commits a new workspace color.
pub struct ColorSetTool;

impl ColorSetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "color_set";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Set the workspace color. Provide exactly one of 'hex', 'rgb', 'hsl' or 'channel' (a single RGB channel edit of the current color). The change is undoable and recorded in the recent list.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all)]
    pub fn execute(params: &ColorSetParams, workspace: &ColorWorkspace) -> CallToolResult {
        info!("Color set tool called");

        let color = if let Some(edit) = &params.channel {
            if params.hex.is_some() || params.rgb.is_some() || params.hsl.is_some() {
                let e = ColorError::invalid_input(
                    "provide exactly one of 'hex', 'rgb', 'hsl' or 'channel'",
                );
                return error_result(&e.to_string());
            }
            match apply_channel_edit(&workspace.current(), edit) {
                Ok(color) => color,
                Err(e) => return error_result(&e),
            }
        } else {
            match resolve_color(&params.hex, &params.rgb, &params.hsl) {
                Ok(color) => color,
                Err(e) => return error_result(&e.to_string()),
            }
        };

        let committed = workspace.commit(color);
        let summary = format!("Workspace color set to {}", committed.hex);
        structured_result(&summary, &committed)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        workspace: Arc<ColorWorkspace>,
    ) -> Result<serde_json::Value, String> {
        let base = super::convert::parse_color_inputs(&arguments)?;

        let channel = match arguments.get("channel") {
            Some(v) => Some(
                serde_json::from_value::<ChannelInput>(v.clone())
                    .map_err(|e| format!("Invalid 'channel' parameter: {}", e))?,
            ),
            None => None,
        };

        info!("Color set tool (HTTP) called");

        let params = ColorSetParams {
            hex: base.hex,
            rgb: base.rgb,
            hsl: base.hsl,
            channel,
        };

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
            input_schema: cached_schema_for_type::<ColorSetParams>(),
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
                let params: ColorSetParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &workspace))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Replace one RGB channel of `current`, validating name and range.
fn apply_channel_edit(current: &Color, edit: &ChannelInput) -> Result<Color, String> {
    let value =
        u8::try_from(edit.value).map_err(|_| format!("Channel value out of range: {}", edit.value))?;

    let mut rgb: Rgb = current.rgb;
    match edit.channel.as_str() {
        "r" => rgb.r = value,
        "g" => rgb.g = value,
        "b" => rgb.b = value,
        other => return Err(format!("Unknown channel '{}': use 'r', 'g' or 'b'", other)),
    }
    Ok(Color::from_rgb(rgb))
}

// ============================================================================
// Tests
// ============================================================================
