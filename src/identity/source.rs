use std::fmt;

use serde::Serialize;

use crate::binding::error::BuildError;
use crate::schema::cedar_json::qualify_entity_type;
use crate::schema::synthesizer::EntityTypeNames;

// ── Provider variants ───────────────────────────────────────────────

/// Identity-provider variant requested for an identity source.
///
/// A closed enumeration: `Oidc` is reserved and fails at bind time until the
/// provisioning model supports it. Adding a variant extends the exhaustive
/// matches in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderVariant {
    /// Cognito-style user-pool provider.
    Cognito,
    /// Generic OIDC provider. Reserved, not yet implemented.
    Oidc,
}

impl fmt::Display for ProviderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderVariant::Cognito => write!(f, "cognito"),
            ProviderVariant::Oidc => write!(f, "oidc"),
        }
    }
}

/// Reference to the user pool backing a Cognito identity source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPoolReference {
    /// ARN of the user pool.
    #[serde(rename = "userPoolArn")]
    pub user_pool_arn: String,
    /// App client ids whose tokens the identity source accepts. Empty means
    /// every client of the pool.
    #[serde(rename = "clientIds")]
    pub client_ids: Vec<String>,
}

impl UserPoolReference {
    /// Reference a pool by ARN, accepting tokens from all of its clients.
    pub fn new(user_pool_arn: impl Into<String>) -> Self {
        UserPoolReference {
            user_pool_arn: user_pool_arn.into(),
            client_ids: Vec::new(),
        }
    }
}

/// Provider-specific connection details, one case per implemented variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ProviderDetails {
    /// Cognito user-pool binding.
    #[serde(rename = "cognitoUserPoolConfiguration")]
    Cognito(UserPoolReference),
}

// ── Identity-source configuration ───────────────────────────────────

/// Validated identity-source configuration, ready to be provisioned against
/// a policy store.
///
/// The entity-type names are namespace-qualified with the same helper the
/// schema uses, so a bound source can only reference types the schema of the
/// same namespace declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentitySourceConfig {
    /// Qualified principal entity type, e.g. `PodcastApp::User`.
    #[serde(rename = "principalEntityType")]
    pub principal_entity_type: String,
    /// Qualified group entity type, e.g. `PodcastApp::UserGroup`.
    #[serde(rename = "groupEntityType")]
    pub group_entity_type: String,
    /// Provider-specific details.
    #[serde(rename = "configuration")]
    pub provider: ProviderDetails,
}

impl IdentitySourceConfig {
    /// Accept tokens issued to one more app client of the bound user pool.
    pub fn add_user_pool_client(&mut self, client_id: impl Into<String>) {
        match &mut self.provider {
            ProviderDetails::Cognito(pool) => pool.client_ids.push(client_id.into()),
        }
    }
}

/// Validate and construct the identity-source configuration.
///
/// Fails closed, before any external resource exists: requesting the
/// reserved `Oidc` variant or omitting the user pool for `Cognito` is a
/// configuration error, never a deferred deployment failure.
pub fn bind_identity_source(
    variant: ProviderVariant,
    namespace: &str,
    names: &EntityTypeNames,
    user_pool: Option<UserPoolReference>,
) -> Result<IdentitySourceConfig, BuildError> {
    let pool = match variant {
        ProviderVariant::Oidc => {
            return Err(BuildError::configuration(
                "identity source variant 'oidc' is not implemented yet",
            ));
        }
        ProviderVariant::Cognito => user_pool.ok_or_else(|| {
            BuildError::configuration(
                "a user pool is required when the identity source variant is 'cognito'",
            )
        })?,
    };

    Ok(IdentitySourceConfig {
        principal_entity_type: qualify_entity_type(namespace, &names.principal),
        group_entity_type: qualify_entity_type(namespace, &names.group),
        provider: ProviderDetails::Cognito(pool),
    })
}

// ── Importing existing sources ──────────────────────────────────────

/// Reference to an identity source that already exists.
///
/// The import path: wraps a known identifier without creating a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentitySourceRef {
    /// Opaque identifier assigned by the identity-source service.
    pub identity_source_id: String,
}

impl IdentitySourceRef {
    /// Reference an existing identity source by its identifier.
    pub fn from_identity_source_id(identity_source_id: impl Into<String>) -> Self {
        IdentitySourceRef {
            identity_source_id: identity_source_id.into(),
        }
    }
}
