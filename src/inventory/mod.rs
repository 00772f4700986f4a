/// JSON inventory documents as exposed by an API-definition service.
pub mod document;
/// HTTP verbs and route descriptors.
pub mod routes;

use crate::inventory::routes::RouteDescriptor;

/// Read-only view of an API's declared routes.
///
/// Implemented by the API-definition collaborator; queried exactly once per
/// build, so implementations should return a stable snapshot.
pub trait RouteInventory {
    /// Display name of the API. The schema namespace derives from it.
    fn api_name(&self) -> &str;

    /// Declared routes in declaration order, wildcard-verb routes included.
    fn routes(&self) -> Vec<RouteDescriptor>;
}
