use crate::binding::authorizer::{AuthorizerHandler, RequestAuthorizer, TokenType};
use crate::binding::collaborators::{
    IdentitySourceRequest, IdentitySourceService, PolicyStoreRequest, PolicyStoreService,
    RouteEnforcement, ValidationMode,
};
use crate::binding::error::BuildError;
use crate::identity::source::{
    bind_identity_source, IdentitySourceConfig, ProviderVariant, UserPoolReference,
};
use crate::inventory::RouteInventory;
use crate::schema::cedar_json::CedarSchema;
use crate::schema::synthesizer::{namespace_from_api_name, synthesize_schema, EntityTypeNames};

/// Caller-supplied inputs for establishing an authorization binding.
#[derive(Debug, Clone)]
pub struct BindingProps {
    /// Requested identity-provider variant.
    pub provider_variant: ProviderVariant,
    /// User pool backing the identity source. Required for the `Cognito`
    /// variant.
    pub user_pool: Option<UserPoolReference>,
    /// Token the authorizer relays to the policy engine per request.
    pub token_type: TokenType,
    /// Principal entity type name; defaults to `User` when unset.
    pub principal_type_name: Option<String>,
    /// Group entity type name; defaults to `UserGroup` when unset.
    pub group_type_name: Option<String>,
    /// Replacement decision handler. When set, the coordinator skips the
    /// default handler but wires and attaches the override identically.
    pub authorizer_handler: Option<AuthorizerHandler>,
}

impl BindingProps {
    /// Props for a Cognito-backed binding with default entity-type names.
    pub fn cognito(user_pool: UserPoolReference, token_type: TokenType) -> Self {
        BindingProps {
            provider_variant: ProviderVariant::Cognito,
            user_pool: Some(user_pool),
            token_type,
            principal_type_name: None,
            group_type_name: None,
            authorizer_handler: None,
        }
    }
}

/// The fully established binding: schema, store, identity source, and the
/// attached authorizer.
#[derive(Debug, Clone)]
pub struct ConnectedPolicyStore {
    /// Namespace derived from the API name.
    pub namespace: String,
    /// The synthesized schema the store was created with.
    pub schema: CedarSchema,
    /// The bound identity-source configuration.
    pub identity_source: IdentitySourceConfig,
    /// Identifier of the created policy store.
    pub policy_store_id: String,
    /// Identifier of the created identity source.
    pub identity_source_id: String,
    /// The authorizer attached to the API.
    pub authorizer: RequestAuthorizer,
}

/// Establish the whole authorization surface for an API, in strict order.
///
/// Configuration is validated before anything is provisioned, so a
/// misconfigured request creates zero external resources. After that:
/// schema synthesis over the route snapshot, policy-store creation under
/// strict validation, identity-source creation against the new store, and
/// finally authorizer attachment. Any failure aborts the build; there is no
/// partial-success state and nothing is retried.
pub fn connect_policy_store(
    inventory: &impl RouteInventory,
    policy_stores: &mut impl PolicyStoreService,
    identity_sources: &mut impl IdentitySourceService,
    enforcement: &mut impl RouteEnforcement,
    props: BindingProps,
) -> Result<ConnectedPolicyStore, BuildError> {
    let api_name = inventory.api_name().to_string();
    let namespace = namespace_from_api_name(&api_name);
    let names = EntityTypeNames::new(
        props.principal_type_name.as_deref(),
        props.group_type_name.as_deref(),
    );

    let identity_source = bind_identity_source(
        props.provider_variant,
        &namespace,
        &names,
        props.user_pool,
    )?;

    let schema = synthesize_schema(&namespace, &inventory.routes(), &names);

    let policy_store_id = policy_stores.create_policy_store(&PolicyStoreRequest {
        description: format!("Policy store for {api_name} API"),
        validation_mode: ValidationMode::Strict,
        cedar_json: schema.to_json_string(),
    })?;

    let identity_source_id = identity_sources.create_identity_source(&IdentitySourceRequest {
        policy_store_id: policy_store_id.clone(),
        config: identity_source.clone(),
    })?;

    let handler = match props.authorizer_handler {
        Some(handler) => handler,
        None => AuthorizerHandler::default_handler(&policy_store_id, &namespace, props.token_type),
    };
    let authorizer = RequestAuthorizer::wired(handler);
    enforcement.attach_authorizer(&api_name, &authorizer)?;

    Ok(ConnectedPolicyStore {
        namespace,
        schema,
        identity_source,
        policy_store_id,
        identity_source_id,
        authorizer,
    })
}
