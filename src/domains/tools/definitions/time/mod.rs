//! Time tools: Unix timestamp conversion.

pub mod timestamp;

pub use timestamp::TimestampConvertTool;
