/// Cedar JSON schema value structs, serializable to the policy-store payload.
pub mod cedar_json;
/// Route snapshot → Cedar schema synthesis pass.
pub mod synthesizer;
