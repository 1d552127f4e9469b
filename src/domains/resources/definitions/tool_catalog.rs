//! Tool catalog resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// Machine-readable catalog of every registered tool (dynamic).
pub struct ToolCatalogResource;

impl ResourceDefinition for ToolCatalogResource {
    const URI: &'static str = "toolbox://server/tools";
    const NAME: &'static str = "Tool Catalog";
    const DESCRIPTION: &'static str = "Names and descriptions of all available tools";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ToolCatalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_catalog_metadata() {
        assert_eq!(ToolCatalogResource::URI, "toolbox://server/tools");
        assert_eq!(ToolCatalogResource::MIME_TYPE, "application/json");
    }
}
