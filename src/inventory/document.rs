use serde::{Deserialize, Serialize};

use crate::inventory::routes::RouteDescriptor;
use crate::inventory::RouteInventory;

/// One declared method entry, in the shape the API-definition service
/// exposes it: raw method string plus resource path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredRoute {
    /// HTTP method as declared, e.g. `"GET"` or `"ANY"`.
    #[serde(rename = "httpMethod")]
    pub http_method: String,
    /// Resource path as declared, e.g. `"/podcasts/{podcastId}"`.
    #[serde(rename = "resourcePath")]
    pub resource_path: String,
}

/// A route inventory document: the API's display name plus its declared
/// methods, as serialized by an API-definition service snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryDocument {
    /// Display name of the API.
    #[serde(rename = "apiName")]
    pub api_name: String,
    /// Declared methods in declaration order.
    pub routes: Vec<DeclaredRoute>,
}

impl InventoryDocument {
    /// Parse an inventory document from its JSON serialization.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid inventory document: {e}"))
    }

    /// Append the routes of another document, keeping this document's API name.
    pub fn merge(&mut self, other: InventoryDocument) {
        self.routes.extend(other.routes);
    }
}

impl RouteInventory for InventoryDocument {
    fn api_name(&self) -> &str {
        &self.api_name
    }

    fn routes(&self) -> Vec<RouteDescriptor> {
        self.routes
            .iter()
            .map(|r| RouteDescriptor::new(&r.http_method, r.resource_path.clone()))
            .collect()
    }
}
