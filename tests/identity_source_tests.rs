use routes2cedar::binding::error::BuildError;
use routes2cedar::identity::source::{
    bind_identity_source, IdentitySourceRef, ProviderDetails, ProviderVariant, UserPoolReference,
};
use routes2cedar::schema::synthesizer::{synthesize_schema, EntityTypeNames};

fn pool() -> UserPoolReference {
    UserPoolReference::new("arn:aws:cognito-idp:eu-west-1:111122223333:userpool/avp-users")
}

// ── Bind-time validation ─────────────────────────────────────────────────────

#[test]
fn binding_the_reserved_variant_is_a_configuration_error() {
    let err = bind_identity_source(
        ProviderVariant::Oidc,
        "PodcastApp",
        &EntityTypeNames::default(),
        Some(pool()),
    )
    .expect_err("oidc is reserved");

    assert!(matches!(err, BuildError::Configuration { .. }));
    assert!(err.to_string().contains("not implemented"), "Error: {err}");
}

#[test]
fn binding_cognito_without_a_pool_is_a_configuration_error() {
    let err = bind_identity_source(
        ProviderVariant::Cognito,
        "PodcastApp",
        &EntityTypeNames::default(),
        None,
    )
    .expect_err("the user pool is mandatory for cognito");

    assert!(matches!(err, BuildError::Configuration { .. }));
    assert!(err.to_string().contains("user pool"), "Error: {err}");
}

// ── Qualification consistency ────────────────────────────────────────────────

#[test]
fn bound_type_names_are_declared_by_the_matching_schema() {
    let names = EntityTypeNames::new(Some("Listener"), Some("ListenerGroup"));
    let schema = synthesize_schema("PodcastApp", &[], &names);
    let config = bind_identity_source(ProviderVariant::Cognito, "PodcastApp", &names, Some(pool()))
        .expect("binding should succeed");

    assert!(schema.declares_entity_type(&config.principal_entity_type));
    assert!(schema.declares_entity_type(&config.group_entity_type));
}

#[test]
fn binding_against_a_different_namespace_references_undeclared_types() {
    let names = EntityTypeNames::default();
    let schema = synthesize_schema("PodcastApp", &[], &names);
    let config = bind_identity_source(ProviderVariant::Cognito, "OtherApp", &names, Some(pool()))
        .expect("binding should succeed");

    assert!(!schema.declares_entity_type(&config.principal_entity_type));
}

// ── Pool clients and the import path ─────────────────────────────────────────

#[test]
fn user_pool_clients_accumulate_on_the_bound_config() {
    let mut config = bind_identity_source(
        ProviderVariant::Cognito,
        "PodcastApp",
        &EntityTypeNames::default(),
        Some(pool()),
    )
    .unwrap();

    config.add_user_pool_client("client-a");
    config.add_user_pool_client("client-b");

    let ProviderDetails::Cognito(bound_pool) = &config.provider;
    assert_eq!(bound_pool.client_ids, vec!["client-a", "client-b"]);
}

#[test]
fn importing_an_existing_source_creates_no_configuration() {
    let imported = IdentitySourceRef::from_identity_source_id("ArE4uRLVgxtSX1Bx56NRTY");
    assert_eq!(imported.identity_source_id, "ArE4uRLVgxtSX1Bx56NRTY");
}
