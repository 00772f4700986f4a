use thiserror::Error;

/// Build-time failure establishing an authorization binding.
///
/// Every variant is fatal: the build aborts with no partial state, no
/// retries. Either the full surface (schema, policy store, identity source,
/// enforcement) is established or none of it is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Invalid caller configuration, raised before any external call.
    #[error("configuration error: {message}")]
    Configuration {
        /// What was misconfigured.
        message: String,
    },

    /// The policy store rejected the synthesized schema under strict validation.
    #[error("schema validation error: {message}")]
    SchemaValidation {
        /// Rejection reason reported by the policy store.
        message: String,
    },

    /// An external collaborator rejected a provisioning request.
    #[error("provisioning error: {message}")]
    Provisioning {
        /// Rejection reason reported by the collaborator.
        message: String,
    },
}

impl BuildError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        BuildError::Configuration {
            message: message.into(),
        }
    }

    /// Create a schema-validation error.
    pub fn schema_validation(message: impl Into<String>) -> Self {
        BuildError::SchemaValidation {
            message: message.into(),
        }
    }

    /// Create a provisioning error.
    pub fn provisioning(message: impl Into<String>) -> Self {
        BuildError::Provisioning {
            message: message.into(),
        }
    }
}
