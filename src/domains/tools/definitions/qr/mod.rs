//! QR code tools.

pub mod generate;

pub use generate::QrGenerateTool;
