/// Request-authorizer types: token types, identity extraction, handlers.
pub mod authorizer;
/// Collaborator traits and wire request types for the external services.
pub mod collaborators;
/// The strict-order orchestration that establishes the whole binding.
pub mod coordinator;
/// Build-time error taxonomy.
pub mod error;
