//! Color-specific error types.

use thiserror::Error;

/// Errors that can occur in the color domain.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A hex string that is not `#rrggbb`.
    #[error("Invalid hex color: '{0}' (expected 6 hex digits, e.g. #1a2b3c)")]
    InvalidHex(String),

    /// An RGB channel outside [0,255].
    #[error("RGB channel '{channel}' out of range: {value} (expected 0-255)")]
    ChannelOutOfRange { channel: &'static str, value: i64 },

    /// An HSL component outside its range.
    #[error("HSL component '{component}' out of range: {value}")]
    ComponentOutOfRange { component: &'static str, value: i64 },

    /// A color input that names none (or more than one) of the accepted formats.
    #[error("Invalid color input: {0}")]
    InvalidInput(String),
}

impl ColorError {
    /// Create a new "invalid hex" error.
    pub fn invalid_hex(hex: impl Into<String>) -> Self {
        Self::InvalidHex(hex.into())
    }

    /// Create a new "invalid input" error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
