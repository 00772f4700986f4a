use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

// ── Cedar JSON schema structs ───────────────────────────────────────

/// Marker struct serialized as `{}` for empty attribute maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyObject {}

/// A `Record`-typed shape with a fixed, empty attribute map.
///
/// Used both as the shape of every entity type and as the context of every
/// action; the schema carries no attribute definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordShape {
    /// Always the literal `"Record"`.
    #[serde(rename = "type")]
    pub shape_type: String,
    /// Attribute map, always empty.
    pub attributes: EmptyObject,
}

impl RecordShape {
    /// The empty `Record` shape.
    pub fn empty() -> Self {
        RecordShape {
            shape_type: "Record".to_string(),
            attributes: EmptyObject {},
        }
    }
}

/// An entity type declared within the schema's namespace.
///
/// Member and referenced type names are bare (unqualified): within the
/// namespace block, Cedar resolves them against the enclosing namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityTypeDeclaration {
    /// Bare names of the parent types this type is a member of.
    #[serde(rename = "memberOfTypes")]
    pub member_of_types: Vec<String>,
    /// Attribute shape, always an empty `Record`.
    pub shape: RecordShape,
}

/// The principal and resource scope of an action, plus its context shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliesTo {
    /// Bare names of the entity types that may act as the principal.
    #[serde(rename = "principalTypes")]
    pub principal_types: Vec<String>,
    /// Bare names of the entity types that may act as the resource.
    #[serde(rename = "resourceTypes")]
    pub resource_types: Vec<String>,
    /// Request context shape, always an empty `Record`.
    pub context: RecordShape,
}

/// An action declaration: one per enforced verb+path pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDeclaration {
    /// What the action applies to.
    #[serde(rename = "appliesTo")]
    pub applies_to: AppliesTo,
}

/// All declarations under a single namespace.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NamespaceDeclaration {
    /// Entity types keyed by bare name.
    #[serde(rename = "entityTypes")]
    pub entity_types: BTreeMap<String, EntityTypeDeclaration>,
    /// Actions keyed by their `"<verb> <path>"` identifier.
    pub actions: BTreeMap<String, ActionDeclaration>,
}

/// A complete Cedar schema: one namespace plus its declarations.
///
/// Built once from a route snapshot and immutable afterwards; serializes to
/// the JSON document handed to the policy store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CedarSchema {
    /// Root scope all qualified type names are prefixed with.
    pub namespace: String,
    /// The declarations under that namespace.
    pub declaration: NamespaceDeclaration,
}

impl CedarSchema {
    /// The JSON document accepted by the policy store, keyed by namespace.
    pub fn to_json(&self) -> Value {
        let mut document = BTreeMap::new();
        document.insert(self.namespace.clone(), &self.declaration);
        serde_json::to_value(document).expect("schema serialization is infallible")
    }

    /// Serialize [`CedarSchema::to_json`] to a compact string payload.
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }

    /// True when `qualified` names an entity type declared in this schema,
    /// using the same `Namespace::Type` qualification the identity source uses.
    pub fn declares_entity_type(&self, qualified: &str) -> bool {
        self.declaration
            .entity_types
            .keys()
            .any(|name| qualify_entity_type(&self.namespace, name) == qualified)
    }

    /// Identifiers of all declared actions.
    pub fn action_ids(&self) -> impl Iterator<Item = &str> {
        self.declaration.actions.keys().map(String::as_str)
    }
}

/// Qualify a bare entity-type name against a namespace.
///
/// The single source of truth for qualification: the identity source must
/// reference entity types exactly as the schema declares them.
pub fn qualify_entity_type(namespace: &str, type_name: &str) -> String {
    format!("{namespace}::{type_name}")
}

// ── Helpers ─────────────────────────────────────────────────────────

/// Entity type with no parents and an empty shape.
pub(crate) fn leaf_entity_type() -> EntityTypeDeclaration {
    EntityTypeDeclaration {
        member_of_types: Vec::new(),
        shape: RecordShape::empty(),
    }
}

/// Entity type that is a member of `parent`, with an empty shape.
pub(crate) fn member_entity_type(parent: &str) -> EntityTypeDeclaration {
    EntityTypeDeclaration {
        member_of_types: vec![parent.to_string()],
        shape: RecordShape::empty(),
    }
}

/// Action scoped to a single principal and resource type.
pub(crate) fn scoped_action(principal_type: &str, resource_type: &str) -> ActionDeclaration {
    ActionDeclaration {
        applies_to: AppliesTo {
            principal_types: vec![principal_type.to_string()],
            resource_types: vec![resource_type.to_string()],
            context: RecordShape::empty(),
        },
    }
}
