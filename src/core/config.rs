//! Configuration management for the toolbox server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Main configuration structure for the toolbox server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Color workspace configuration.
    pub color: ColorConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Security configuration for file-writing tools.
    pub security: SecurityConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the color workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Hex color the workspace starts on.
    pub default_hex: String,

    /// Maximum number of entries kept in the recent-colors list.
    pub recent_limit: usize,
}

impl ColorConfig {
    /// Fallback seed color when `default_hex` cannot be parsed.
    pub const BUILTIN_DEFAULT_HEX: &'static str = "#6366f1";
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            default_hex: Self::BUILTIN_DEFAULT_HEX.to_string(),
            recent_limit: 10,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for file output validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Optional root directory for tool file output (e.g. QR exports).
    /// If None, any writable location is allowed.
    pub output_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "toolbox-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            color: ColorConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `TOOLBOX_`.
    /// For example: `TOOLBOX_SERVER_NAME`, `TOOLBOX_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("TOOLBOX_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("TOOLBOX_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(hex) = std::env::var("TOOLBOX_COLOR_DEFAULT") {
            config.color.default_hex = hex;
        }

        if let Ok(limit) = std::env::var("TOOLBOX_COLOR_RECENT_LIMIT")
            && let Ok(limit) = limit.parse()
        {
            config.color.recent_limit = limit;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(root) = std::env::var("TOOLBOX_OUTPUT_ROOT") {
            config.security.output_root = Some(PathBuf::from(root));
            info!(
                "File output restricted to {:?}",
                config.security.output_root
            );
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_color_config() {
        let config = Config::default();
        assert_eq!(config.color.default_hex, "#6366f1");
        assert_eq!(config.color.recent_limit, 10);
        assert!(config.security.output_root.is_none());
    }

    #[test]
    fn test_color_default_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TOOLBOX_COLOR_DEFAULT", "#ff8800");
        }
        let config = Config::from_env();
        assert_eq!(config.color.default_hex, "#ff8800");
        unsafe {
            std::env::remove_var("TOOLBOX_COLOR_DEFAULT");
        }
    }

    #[test]
    fn test_output_root_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TOOLBOX_OUTPUT_ROOT", "/tmp/toolbox-out");
        }
        let config = Config::from_env();
        assert_eq!(
            config.security.output_root.as_deref(),
            Some(std::path::Path::new("/tmp/toolbox-out"))
        );
        unsafe {
            std::env::remove_var("TOOLBOX_OUTPUT_ROOT");
        }
    }

    #[test]
    fn test_recent_limit_bad_value_ignored() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("TOOLBOX_COLOR_RECENT_LIMIT", "not-a-number");
        }
        let config = Config::from_env();
        assert_eq!(config.color.recent_limit, 10);
        unsafe {
            std::env::remove_var("TOOLBOX_COLOR_RECENT_LIMIT");
        }
    }
}
