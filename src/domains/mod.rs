//! Domain modules for the toolbox server.
//!
//! Each domain owns one area of functionality:
//! - `color` - color space math and the shared color workspace
//! - `tools` - MCP tool definitions, registry and router
//! - `resources` - MCP resources (server metadata, documentation)

pub mod color;
pub mod resources;
pub mod tools;
