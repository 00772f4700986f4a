use std::collections::BTreeMap;

use crate::inventory::routes::{HttpVerb, RouteDescriptor};
use crate::schema::cedar_json::{
    leaf_entity_type, member_entity_type, scoped_action, CedarSchema, NamespaceDeclaration,
};

/// Entity type always present as the generic resource: the protected API as a whole.
pub const RESOURCE_ENTITY_TYPE: &str = "Application";

/// Principal entity type name used when the caller does not override it.
pub const DEFAULT_PRINCIPAL_TYPE: &str = "User";

/// Group entity type name used when the caller does not override it.
pub const DEFAULT_GROUP_TYPE: &str = "UserGroup";

/// Lowercase verb tokens that participate in the authorization surface.
///
/// The wildcard verb expands to exactly this set; anything else is excluded.
pub const ENFORCED_VERBS: [&str; 5] = ["get", "post", "put", "patch", "delete"];

/// Names of the principal and group entity types the schema declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTypeNames {
    /// Name of the principal entity type.
    pub principal: String,
    /// Name of the group entity type.
    pub group: String,
}

impl EntityTypeNames {
    /// Apply the defaults for any name the caller left unset.
    pub fn new(principal: Option<&str>, group: Option<&str>) -> Self {
        EntityTypeNames {
            principal: principal.unwrap_or(DEFAULT_PRINCIPAL_TYPE).to_string(),
            group: group.unwrap_or(DEFAULT_GROUP_TYPE).to_string(),
        }
    }
}

impl Default for EntityTypeNames {
    fn default() -> Self {
        EntityTypeNames::new(None, None)
    }
}

/// Derive the schema namespace from the API's display name.
// TODO: validate that the name satisfies Cedar's namespace identifier grammar
pub fn namespace_from_api_name(api_name: &str) -> String {
    api_name.to_string()
}

/// Verb tokens a declared verb contributes to the authorization surface.
///
/// `Any` fans out to the whole enforced set; verbs outside it (e.g. OPTIONS
/// for CORS preflight) contribute nothing and are dropped without error.
fn enforced_tokens(verb: &HttpVerb) -> &'static [&'static str] {
    match verb {
        HttpVerb::Get => &["get"],
        HttpVerb::Post => &["post"],
        HttpVerb::Put => &["put"],
        HttpVerb::Patch => &["patch"],
        HttpVerb::Delete => &["delete"],
        HttpVerb::Any => &ENFORCED_VERBS,
        HttpVerb::Other(_) => &[],
    }
}

/// Build a Cedar schema from a snapshot of declared routes.
///
/// Pure over its input: the same snapshot always yields the same schema.
/// Duplicate `"<verb> <path>"` keys collapse to a single action (the map
/// insert overwrites; the declarations are identical anyway).
pub fn synthesize_schema(
    namespace: &str,
    routes: &[RouteDescriptor],
    names: &EntityTypeNames,
) -> CedarSchema {
    let mut entity_types = BTreeMap::new();
    entity_types.insert(names.group.clone(), leaf_entity_type());
    entity_types.insert(names.principal.clone(), member_entity_type(&names.group));
    entity_types.insert(RESOURCE_ENTITY_TYPE.to_string(), leaf_entity_type());

    let mut actions = BTreeMap::new();
    for route in routes {
        for token in enforced_tokens(&route.verb) {
            let action_id = format!("{token} {path}", path = route.path);
            actions.insert(action_id, scoped_action(&names.principal, RESOURCE_ENTITY_TYPE));
        }
    }

    CedarSchema {
        namespace: namespace.to_string(),
        declaration: NamespaceDeclaration {
            entity_types,
            actions,
        },
    }
}

/// Declared routes that contribute no action to the schema.
///
/// Diagnostics for reports; exclusion itself is silent by design.
pub fn excluded_routes(routes: &[RouteDescriptor]) -> Vec<&RouteDescriptor> {
    routes
        .iter()
        .filter(|route| enforced_tokens(&route.verb).is_empty())
        .collect()
}
