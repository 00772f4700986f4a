use std::fmt;

use serde::Serialize;

use crate::binding::authorizer::RequestAuthorizer;
use crate::binding::error::BuildError;
use crate::identity::source::IdentitySourceConfig;

// ── Policy store ────────────────────────────────────────────────────

/// Schema validation applied by the policy store at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationMode {
    /// Reject schemas with undefined entity/action references.
    #[serde(rename = "STRICT")]
    Strict,
    /// Accept any schema payload.
    #[serde(rename = "OFF")]
    Off,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Strict => write!(f, "STRICT"),
            ValidationMode::Off => write!(f, "OFF"),
        }
    }
}

/// Request to create a policy store holding a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyStoreRequest {
    /// Human-readable description of the store.
    pub description: String,
    /// Validation applied to the schema at creation time.
    #[serde(rename = "validationMode")]
    pub validation_mode: ValidationMode,
    /// The schema document, serialized as Cedar JSON.
    #[serde(rename = "cedarJson")]
    pub cedar_json: String,
}

/// Provisions policy stores in the external policy engine.
pub trait PolicyStoreService {
    /// Create a policy store and return its opaque identifier.
    ///
    /// Under [`ValidationMode::Strict`] an internally inconsistent schema is
    /// rejected here; the rejection surfaces as
    /// [`BuildError::SchemaValidation`] and aborts the build.
    fn create_policy_store(&mut self, request: &PolicyStoreRequest) -> Result<String, BuildError>;
}

// ── Identity source ─────────────────────────────────────────────────

/// Request to create an identity source against an existing policy store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentitySourceRequest {
    /// Identifier of the policy store the source is bound to.
    #[serde(rename = "policyStoreId")]
    pub policy_store_id: String,
    /// The validated identity-source configuration.
    #[serde(flatten)]
    pub config: IdentitySourceConfig,
}

/// Provisions identity sources in the external policy engine.
pub trait IdentitySourceService {
    /// Create an identity source and return its opaque identifier.
    fn create_identity_source(
        &mut self,
        request: &IdentitySourceRequest,
    ) -> Result<String, BuildError>;
}

// ── Route enforcement ───────────────────────────────────────────────

/// Attaches request-time enforcement to a named API.
pub trait RouteEnforcement {
    /// Attach the authorizer so every route of `api_name` is evaluated
    /// through it.
    fn attach_authorizer(
        &mut self,
        api_name: &str,
        authorizer: &RequestAuthorizer,
    ) -> Result<(), BuildError>;
}
