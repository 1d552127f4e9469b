//! Text codec tools: JSON formatting, Base64, and URL percent-encoding.

pub mod base64;
pub mod json;
pub mod url;

pub use base64::Base64ConvertTool;
pub use json::JsonFormatTool;
pub use url::UrlConvertTool;
