//! Tool Router - builds the rmcp ToolRouter from registry.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;
use crate::domains::color::ColorWorkspace;

use super::definitions::{
    Base64ConvertTool, ColorConvertTool, ColorRecentTool, ColorRedoTool, ColorSetTool,
    ColorTransformTool, ColorUndoTool, JsonFormatTool, QrGenerateTool, TimestampConvertTool,
    UrlConvertTool,
};

/// Build the tool router with all registered tools.
///
/// Stateful color tools share the one workspace, so every transport sees
/// the same history and recent list.
pub fn build_tool_router<S>(config: Arc<Config>, workspace: Arc<ColorWorkspace>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(JsonFormatTool::create_route())
        .with_route(Base64ConvertTool::create_route())
        .with_route(UrlConvertTool::create_route())
        .with_route(TimestampConvertTool::create_route())
        .with_route(ColorConvertTool::create_route())
        .with_route(ColorSetTool::create_route(workspace.clone()))
        .with_route(ColorTransformTool::create_route(workspace.clone()))
        .with_route(ColorUndoTool::create_route(workspace.clone()))
        .with_route(ColorRedoTool::create_route(workspace.clone()))
        .with_route(ColorRecentTool::create_route(workspace))
        .with_route(QrGenerateTool::create_route(config))
}
