//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::HashMap;
use tracing::info;

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::config::ServerConfig;
use crate::domains::tools::ToolRegistry;

/// URI prefix served by the `toolbox://docs/{tool}` template.
const TOOL_DOCS_PREFIX: &str = "toolbox://docs/";

/// Service for managing and accessing resources.
///
/// This service maintains a registry of available resources and handles
/// resource listing and reading operations.
pub struct ResourceService {
    /// Server identity, embedded in the server-info resource.
    server: ServerConfig,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content that requires computation.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// Server identity and capability summary.
    ServerInfo,

    /// Catalog of every registered tool.
    ToolCatalog,
}

impl ResourceService {
    /// Create a new ResourceService for the given server identity.
    pub fn new(server: ServerConfig) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            server,
            resources: HashMap::new(),
            templates: Vec::new(),
        };

        // Register all resources and templates from registry
        service.register_from_registry();
        service.register_templates_from_registry();

        service
    }

    /// Register all resources from the registry.
    fn register_from_registry(&mut self) {
        info!("Registering resources from registry");
        for entry in get_all_resources() {
            self.register_resource(entry);
        }
    }

    /// Register all resource templates from the registry.
    fn register_templates_from_registry(&mut self) {
        info!("Registering resource templates from registry");
        self.templates = get_all_resource_templates();
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// Fixed URIs are looked up in the registry first; anything else under
    /// `toolbox://docs/` is resolved through the per-tool doc template.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let content = match self.resources.get(uri) {
            Some(entry) => match &entry.content {
                ResourceContent::Text(text) => ResourceContents::text(text, uri),
                ResourceContent::Dynamic(dynamic_type) => {
                    self.resolve_dynamic_content(uri, dynamic_type)?
                }
            },
            None => match uri.strip_prefix(TOOL_DOCS_PREFIX) {
                Some(tool_name) => resolve_tool_doc(uri, tool_name)?,
                None => return Err(ResourceError::not_found(uri)),
            },
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    /// Resolve dynamic resource content.
    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: &DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => {
                let tools = ToolRegistry::get_all_tools();
                let info = serde_json::json!({
                    "name": self.server.name,
                    "version": self.server.version,
                    "protocol": "MCP",
                    "tool_count": tools.len(),
                });

                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&info)
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
            DynamicResourceType::ToolCatalog => {
                let catalog: Vec<_> = ToolRegistry::get_all_tools()
                    .iter()
                    .map(|tool| {
                        serde_json::json!({
                            "name": tool.name,
                            "description": tool.description,
                        })
                    })
                    .collect();

                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&serde_json::json!({ "tools": catalog }))
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
        }
    }
}

/// Render the markdown reference doc for one tool.
fn resolve_tool_doc(uri: &str, tool_name: &str) -> Result<ResourceContents, ResourceError> {
    let tool = ToolRegistry::get_all_tools()
        .into_iter()
        .find(|tool| tool.name == tool_name)
        .ok_or_else(|| ResourceError::not_found(uri))?;

    let schema = serde_json::to_string_pretty(tool.input_schema.as_ref())
        .map_err(|e| ResourceError::internal(e.to_string()))?;

    let doc = format!(
        "# {}\n\n{}\n\n## Input schema\n\n```json\n{}\n```\n",
        tool.name,
        tool.description.as_deref().unwrap_or("(no description)"),
        schema
    );

    Ok(ResourceContents::text(doc, uri))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ResourceService {
        ResourceService::new(crate::core::config::Config::default().server)
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = service();

        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 3);

        let templates = service.list_resource_templates().await;
        assert_eq!(templates.len(), 1);
    }

    #[tokio::test]
    async fn test_read_usage_guide() {
        let service = service();

        let result = service.read_resource("toolbox://docs/usage").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let service = service();

        let result = service.read_resource("toolbox://server/info").await.unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                assert!(text.contains("toolbox-mcp-server"));
                assert!(text.contains("tool_count"));
            }
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_read_tool_catalog() {
        let service = service();

        let result = service
            .read_resource("toolbox://server/tools")
            .await
            .unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                assert!(text.contains("json_format"));
                assert!(text.contains("qr_generate"));
            }
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_read_tool_doc_via_template() {
        let service = service();

        let result = service
            .read_resource("toolbox://docs/color_set")
            .await
            .unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                assert!(text.starts_with("# color_set"));
                assert!(text.contains("Input schema"));
            }
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_read_unknown_tool_doc() {
        let service = service();

        let result = service.read_resource("toolbox://docs/no_such_tool").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = service();

        let result = service.read_resource("toolbox://server/nonexistent").await;
        assert!(result.is_err());
    }
}
