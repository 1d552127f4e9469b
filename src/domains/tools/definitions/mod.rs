//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod codec;
pub mod color;
pub mod common;
pub mod qr;
pub mod time;

pub use codec::{Base64ConvertTool, JsonFormatTool, UrlConvertTool};
pub use color::{
    ColorConvertTool, ColorRecentTool, ColorRedoTool, ColorSetTool, ColorTransformTool,
    ColorUndoTool,
};
pub use qr::QrGenerateTool;
pub use time::TimestampConvertTool;
