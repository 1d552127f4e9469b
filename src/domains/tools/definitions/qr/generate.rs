//! QR code generation tool definition.
//!
//! Renders QR codes as SVG markup or terminal block art, optionally
//! writing the SVG to a file.

use futures::FutureExt;
use qrcode::{EcLevel, QrCode, render::svg};
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::fs;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::config::Config;
use crate::core::security::validate_output_path;
use crate::domains::color::space::hex_to_rgb;
use crate::domains::tools::definitions::common::{error_result, success_result};

/// Default rendered size in pixels for SVG output.
const DEFAULT_SIZE: u32 = 200;

/// Accepted rendered sizes, matching the presets QR consumers expect.
const ALLOWED_SIZES: &[u32] = &[128, 200, 256, 512];

// ============================================================================
// Tool Parameters
// ============================================================================

/// Error correction level, from lowest to highest redundancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub enum QrLevel {
    /// ~7% recovery.
    L,
    /// ~15% recovery (default).
    #[default]
    M,
    /// ~25% recovery.
    Q,
    /// ~30% recovery.
    H,
}

impl From<QrLevel> for EcLevel {
    fn from(level: QrLevel) -> Self {
        match level {
            QrLevel::L => EcLevel::L,
            QrLevel::M => EcLevel::M,
            QrLevel::Q => EcLevel::Q,
            QrLevel::H => EcLevel::H,
        }
    }
}

/// Output format for the rendered code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum QrFormat {
    /// Scalable SVG markup (default).
    #[default]
    Svg,
    /// Block-character art for terminals.
    Unicode,
}

/// Parameters for the QR generate tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QrGenerateParams {
    /// The text or URL to encode.
    pub text: String,

    /// Error correction level: "L", "M" (default), "Q" or "H".
    #[serde(default)]
    pub level: QrLevel,

    /// Output format: "svg" (default) or "unicode".
    #[serde(default)]
    pub format: QrFormat,

    /// Rendered size in pixels for SVG output: 128, 200 (default), 256 or 512.
    #[serde(default)]
    pub size: Option<u32>,

    /// Foreground (dark module) color as a hex string. Defaults to "#000000".
    #[serde(default)]
    pub fg_color: Option<String>,

    /// Background (light module) color as a hex string. Defaults to "#ffffff".
    #[serde(default)]
    pub bg_color: Option<String>,

    /// Write the SVG to this file instead of returning it inline.
    #[serde(default)]
    pub output_path: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// QR generate tool - encode text into a QR code.
pub struct QrGenerateTool;

impl QrGenerateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "qr_generate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Generate a QR code for a text or URL. Returns SVG markup (optionally written to a file) or terminal block art. Supports error correction levels L/M/Q/H, preset sizes and custom colors.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(format = ?params.format, level = ?params.level))]
    pub fn execute(params: &QrGenerateParams, config: &Config) -> CallToolResult {
        info!("QR generate tool called");

        if params.text.is_empty() {
            return error_result("Input is empty: provide text to encode");
        }

        let code = match QrCode::with_error_correction_level(params.text.as_bytes(), params.level.into())
        {
            Ok(code) => code,
            Err(e) => return error_result(&format!("Failed to encode QR code: {}", e)),
        };

        match params.format {
            QrFormat::Unicode => {
                if params.output_path.is_some() {
                    return error_result("'output_path' is only supported for SVG output");
                }
                let art = code
                    .render::<char>()
                    .quiet_zone(false)
                    .module_dimensions(2, 1)
                    .dark_color('█')
                    .light_color(' ')
                    .build();
                success_result(art)
            }
            QrFormat::Svg => {
                let size = match params.size {
                    Some(size) if !ALLOWED_SIZES.contains(&size) => {
                        return error_result(&format!(
                            "Invalid size {}: use one of 128, 200, 256 or 512",
                            size
                        ));
                    }
                    Some(size) => size,
                    None => DEFAULT_SIZE,
                };

                let fg = match normalize_color(params.fg_color.as_deref(), "#000000") {
                    Ok(hex) => hex,
                    Err(e) => return error_result(&e),
                };
                let bg = match normalize_color(params.bg_color.as_deref(), "#ffffff") {
                    Ok(hex) => hex,
                    Err(e) => return error_result(&e),
                };

                let markup = code
                    .render::<svg::Color>()
                    .min_dimensions(size, size)
                    .dark_color(svg::Color(&fg))
                    .light_color(svg::Color(&bg))
                    .build();

                match &params.output_path {
                    Some(output_path) => {
                        let target = match validate_output_path(output_path, config) {
                            Ok(p) => p,
                            Err(e) => {
                                warn!("Output path validation failed: {}", e);
                                return error_result(&format!(
                                    "Output path validation failed: {}",
                                    e
                                ));
                            }
                        };
                        match fs::write(&target, &markup) {
                            Ok(()) => success_result(format!(
                                "QR code written to {}",
                                target.display()
                            )),
                            Err(e) => {
                                error_result(&format!("Failed to write QR code file: {}", e))
                            }
                        }
                    }
                    None => success_result(markup),
                }
            }
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let params: QrGenerateParams = serde_json::from_value(arguments)
            .map_err(|e| format!("Invalid parameters: {}", e))?;

        if params.text.is_empty() {
            return Err("Missing or invalid 'text' parameter".to_string());
        }

        info!("QR generate tool (HTTP) called");

        let result = Self::execute(&params, &config);

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
            input_schema: cached_schema_for_type::<QrGenerateParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: QrGenerateParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Validate an optional hex color and normalize it to lowercase `#rrggbb`.
fn normalize_color(input: Option<&str>, default: &str) -> Result<String, String> {
    match input {
        None => Ok(default.to_string()),
        Some(hex) => {
            let rgb = hex_to_rgb(hex).map_err(|e| e.to_string())?;
            Ok(crate::domains::color::space::rgb_to_hex(rgb))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
