use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ── Token types ─────────────────────────────────────────────────────

/// Which token the authorization engine is asked to evaluate per request.
///
/// Clients pass the token in the `Authorization` header; the authorizer
/// relays it as one or the other claim set. The binding never interprets
/// token contents itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenType {
    /// Evaluate the identity token.
    #[serde(rename = "identityToken")]
    IdentityToken,
    /// Evaluate the access token.
    #[serde(rename = "accessToken")]
    AccessToken,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::IdentityToken => write!(f, "identityToken"),
            TokenType::AccessToken => write!(f, "accessToken"),
        }
    }
}

// ── Identity extraction ─────────────────────────────────────────────

/// Where the request pipeline extracts an identity value for the authorizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum IdentityExtraction {
    /// A request header, e.g. the `Authorization` bearer token.
    Header(String),
    /// A request-context value, e.g. the invoked method or path.
    Context(String),
}

impl IdentityExtraction {
    /// Extract from a request header.
    pub fn header(name: impl Into<String>) -> Self {
        IdentityExtraction::Header(name.into())
    }

    /// Extract from the request context.
    pub fn context(name: impl Into<String>) -> Self {
        IdentityExtraction::Context(name.into())
    }

    /// The request-mapping expression understood by the gateway.
    pub fn mapping_expression(&self) -> String {
        match self {
            IdentityExtraction::Header(name) => format!("method.request.header.{name}"),
            IdentityExtraction::Context(name) => format!("context.{name}"),
        }
    }
}

// ── Handler and authorizer ──────────────────────────────────────────

/// Handler environment key carrying the policy-store identifier.
pub const ENV_POLICY_STORE_ID: &str = "POLICY_STORE_ID";
/// Handler environment key carrying the schema namespace.
pub const ENV_NAMESPACE: &str = "NAMESPACE";
/// Handler environment key carrying the token type.
pub const ENV_TOKEN_TYPE: &str = "TOKEN_TYPE";

/// The policy-engine operation the default handler must be allowed to invoke.
pub const AUTHORIZE_WITH_TOKEN_ACTION: &str = "verifiedpermissions:IsAuthorizedWithToken";

/// The decision-logic handler a request authorizer invokes.
///
/// Either the default built by the coordinator or a caller-supplied override
/// with custom logic; both are wired identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizerHandler {
    /// Deployment name of the handler.
    pub name: String,
    /// Environment handed to the handler at invocation time.
    pub environment: BTreeMap<String, String>,
    /// Policy-engine actions the handler is granted, against any resource.
    pub allowed_actions: Vec<String>,
}

impl AuthorizerHandler {
    /// The default decision handler for a policy store.
    ///
    /// Receives the store identifier, the schema namespace, and the token
    /// type through its environment, and is granted the "authorize with
    /// token" operation.
    pub fn default_handler(
        policy_store_id: &str,
        namespace: &str,
        token_type: TokenType,
    ) -> Self {
        let mut environment = BTreeMap::new();
        environment.insert(ENV_POLICY_STORE_ID.to_string(), policy_store_id.to_string());
        environment.insert(ENV_NAMESPACE.to_string(), namespace.to_string());
        environment.insert(ENV_TOKEN_TYPE.to_string(), token_type.to_string());

        AuthorizerHandler {
            name: format!("avp-authorizer-{policy_store_id}"),
            environment,
            allowed_actions: vec![AUTHORIZE_WITH_TOKEN_ACTION.to_string()],
        }
    }
}

/// A request-time authorizer: a handler plus the identity values the
/// pipeline extracts for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestAuthorizer {
    /// The decision-logic handler.
    pub handler: AuthorizerHandler,
    /// Identity-extraction sources, in extraction order.
    pub identity_sources: Vec<IdentityExtraction>,
}

impl RequestAuthorizer {
    /// Wire a handler with the fixed extraction topology: the bearer token
    /// header plus the contextual method and path. Handler overrides replace
    /// decision logic only, never this topology.
    pub fn wired(handler: AuthorizerHandler) -> Self {
        RequestAuthorizer {
            handler,
            identity_sources: vec![
                IdentityExtraction::header("Authorization"),
                IdentityExtraction::context("httpMethod"),
                IdentityExtraction::context("path"),
            ],
        }
    }
}
