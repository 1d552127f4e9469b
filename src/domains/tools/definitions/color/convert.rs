//! Color convert tool definition.
//!
//! Stateless conversion between hex, RGB, HSL and CMYK. Does not touch
//! the shared color workspace.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::color::{Color, ColorError, Rgb};
use crate::domains::tools::definitions::common::{error_result, structured_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Raw RGB channels as given by the client, validated on use.
#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
pub struct RgbInput {
    /// Red channel, 0-255.
    pub r: i64,
    /// Green channel, 0-255.
    pub g: i64,
    /// Blue channel, 0-255.
    pub b: i64,
}

/// Raw HSL components as given by the client, validated on use.
#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
pub struct HslInput {
    /// Hue in degrees, 0-359.
    pub h: i64,
    /// Saturation in percent, 0-100.
    pub s: i64,
    /// Lightness in percent, 0-100.
    pub l: i64,
}

/// Parameters for the color convert tool. Exactly one input must be set.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ColorConvertParams {
    /// A hex color such as "#6366f1".
    #[serde(default)]
    pub hex: Option<String>,

    /// RGB channels.
    #[serde(default)]
    pub rgb: Option<RgbInput>,

    /// HSL components.
    #[serde(default)]
    pub hsl: Option<HslInput>,
}

/// Build a color from whichever single input the params carry.
pub(crate) fn resolve_color(
    hex: &Option<String>,
    rgb: &Option<RgbInput>,
    hsl: &Option<HslInput>,
) -> Result<Color, ColorError> {
    let provided = hex.is_some() as u8 + rgb.is_some() as u8 + hsl.is_some() as u8;
    if provided != 1 {
        return Err(ColorError::invalid_input(
            "provide exactly one of 'hex', 'rgb' or 'hsl'",
        ));
    }

    if let Some(hex) = hex {
        return Color::from_hex(hex);
    }
    if let Some(rgb) = rgb {
        return Ok(Color::from_rgb(Rgb::from_components(rgb.r, rgb.g, rgb.b)?));
    }
    if let Some(hsl) = hsl {
        return Color::from_hsl(hsl.h, hsl.s, hsl.l);
    }

    unreachable!("exactly one input checked above")
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Color convert tool - hex/RGB/HSL in, all four representations out.
pub struct ColorConvertTool;

impl ColorConvertTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "color_convert";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Convert a color between representations. Provide exactly one of 'hex', 'rgb' or 'hsl' and get hex, RGB, HSL and CMYK back. Does not change the color workspace.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all)]
    pub fn execute(params: &ColorConvertParams) -> CallToolResult {
        info!("Color convert tool called");

        match resolve_color(&params.hex, &params.rgb, &params.hsl) {
            Ok(color) => {
                let summary = format!("Converted {}", color.hex);
                structured_result(&summary, &color)
            }
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, String> {
        let params = parse_color_inputs(&arguments)?;

        info!("Color convert tool (HTTP) called");

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
            input_schema: cached_schema_for_type::<ColorConvertParams>(),
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
                let params: ColorConvertParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

/// Extract the hex/rgb/hsl inputs from raw HTTP arguments.
#[cfg(feature = "http")]
pub(crate) fn parse_color_inputs(
    arguments: &serde_json::Value,
) -> Result<ColorConvertParams, String> {
    let hex = arguments
        .get("hex")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    let rgb = match arguments.get("rgb") {
        Some(v) => Some(
            serde_json::from_value::<RgbInput>(v.clone())
                .map_err(|e| format!("Invalid 'rgb' parameter: {}", e))?,
        ),
        None => None,
    };

    let hsl = match arguments.get("hsl") {
        Some(v) => Some(
            serde_json::from_value::<HslInput>(v.clone())
                .map_err(|e| format!("Invalid 'hsl' parameter: {}", e))?,
        ),
        None => None,
    };

    Ok(ColorConvertParams { hex, rgb, hsl })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_convert_from_hex() {
        let params = ColorConvertParams {
            hex: Some("#6366f1".to_string()),
            rgb: None,
            hsl: None,
        };

        let result = ColorConvertTool::execute(&params);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        let text = result_text(&result);
        assert!(text.contains("\"hex\": \"#6366f1\""));
        assert!(text.contains("\"h\": 239"));
        assert!(text.contains("\"k\": 5"));
    }

    #[test]
    fn test_convert_from_rgb() {
        let params = ColorConvertParams {
            hex: None,
            rgb: Some(RgbInput { r: 255, g: 0, b: 0 }),
            hsl: None,
        };

        let result = ColorConvertTool::execute(&params);
        assert!(result_text(&result).contains("\"hex\": \"#ff0000\""));
    }

    #[test]
    fn test_convert_from_hsl() {
        let params = ColorConvertParams {
            hex: None,
            rgb: None,
            hsl: Some(HslInput { h: 120, s: 100, l: 50 }),
        };

        let result = ColorConvertTool::execute(&params);
        assert!(result_text(&result).contains("\"hex\": \"#00ff00\""));
    }

    #[test]
    fn test_no_input_is_error() {
        let params = ColorConvertParams {
            hex: None,
            rgb: None,
            hsl: None,
        };

        let result = ColorConvertTool::execute(&params);
        assert!(result.is_error.unwrap_or(false));
        let text = result_text(&result);
        assert!(text.contains("Invalid color input"));
        assert!(text.contains("exactly one"));
    }

    #[test]
    fn test_two_inputs_is_error() {
        let params = ColorConvertParams {
            hex: Some("#000000".to_string()),
            rgb: Some(RgbInput { r: 0, g: 0, b: 0 }),
            hsl: None,
        };

        let result = ColorConvertTool::execute(&params);
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_invalid_hex_is_error() {
        let params = ColorConvertParams {
            hex: Some("#fff".to_string()),
            rgb: None,
            hsl: None,
        };

        let result = ColorConvertTool::execute(&params);
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_rgb_out_of_range_is_error() {
        let params = ColorConvertParams {
            hex: None,
            rgb: Some(RgbInput { r: 300, g: 0, b: 0 }),
            hsl: None,
        };

        let result = ColorConvertTool::execute(&params);
        assert!(result.is_error.unwrap_or(false));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler() {
        let args = serde_json::json!({ "hex": "#6366f1" });

        let result = ColorConvertTool::http_handler(args);
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_handler_malformed_rgb() {
        let args = serde_json::json!({ "rgb": { "r": 1 } });

        let result = ColorConvertTool::http_handler(args);
        assert!(result.is_err());
    }
}
