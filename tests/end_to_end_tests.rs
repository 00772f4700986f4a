use std::collections::BTreeSet;

use routes2cedar::binding::authorizer::TokenType;
use routes2cedar::binding::coordinator::{connect_policy_store, BindingProps};
use routes2cedar::identity::source::UserPoolReference;
use routes2cedar::inventory::routes::RouteDescriptor;
use routes2cedar::inventory::RouteInventory;
use routes2cedar::schema::synthesizer::{excluded_routes, synthesize_schema, EntityTypeNames};

mod support;
use support::{new_journal, RecordingEnforcement, RecordingIdentitySources, RecordingPolicyStores};

/// Full synthesis pass over the podcast API.
/// This is the primary acceptance test.
#[test]
fn end_to_end_podcast_schema() {
    let routes = vec![
        RouteDescriptor::new("GET", "/podcasts"),
        RouteDescriptor::new("POST", "/podcasts"),
        RouteDescriptor::new("DELETE", "/podcasts"),
        RouteDescriptor::new("ANY", "/podcasts/{id}"),
        RouteDescriptor::new("PATCH", "/artists/{id}"),
        RouteDescriptor::new("DELETE", "/artists/{id}"),
    ];

    let schema = synthesize_schema("PodcastApp", &routes, &EntityTypeNames::default());

    let expected: BTreeSet<&str> = [
        "get /podcasts",
        "post /podcasts",
        "delete /podcasts",
        "get /podcasts/{id}",
        "post /podcasts/{id}",
        "put /podcasts/{id}",
        "patch /podcasts/{id}",
        "delete /podcasts/{id}",
        "patch /artists/{id}",
        "delete /artists/{id}",
    ]
    .into_iter()
    .collect();
    assert_eq!(schema.action_ids().collect::<BTreeSet<_>>(), expected);

    let types: BTreeSet<&str> = schema
        .declaration
        .entity_types
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(types, BTreeSet::from(["UserGroup", "User", "Application"]));
    assert_eq!(
        schema.declaration.entity_types["User"].member_of_types,
        vec!["UserGroup"]
    );
}

/// The fixture inventory carries CORS preflight routes; they are reported as
/// excluded but never block synthesis.
#[test]
fn end_to_end_fixture_inventory_pipeline() {
    let inventory = support::load_fixture_inventory("podcast_app");
    let routes = inventory.routes();

    let schema = synthesize_schema(
        inventory.api_name(),
        &routes,
        &EntityTypeNames::default(),
    );
    assert_eq!(schema.action_ids().count(), 10);

    let excluded = excluded_routes(&routes);
    assert_eq!(excluded.len(), 3);
    assert!(excluded.iter().all(|r| r.verb.as_str() == "options"));
}

/// Establishing the full binding over the fixture inventory provisions one
/// store, one identity source, and one attachment.
#[test]
fn end_to_end_connected_policy_store() {
    let inventory = support::load_fixture_inventory("podcast_app");
    let journal = new_journal();
    let mut stores = RecordingPolicyStores::new(&journal);
    let mut sources = RecordingIdentitySources::new(&journal);
    let mut enforcement = RecordingEnforcement::new(&journal);

    let connected = connect_policy_store(
        &inventory,
        &mut stores,
        &mut sources,
        &mut enforcement,
        BindingProps::cognito(
            UserPoolReference::new("arn:aws:cognito-idp:eu-west-1:111122223333:userpool/avp-users"),
            TokenType::IdentityToken,
        ),
    )
    .expect("binding should succeed");

    assert_eq!(stores.requests.len(), 1);
    assert_eq!(sources.requests.len(), 1);
    assert_eq!(enforcement.attachments.len(), 1);

    // Every identity-source type is declared by the schema the store holds.
    assert!(connected
        .schema
        .declares_entity_type(&connected.identity_source.principal_entity_type));
    assert!(connected
        .schema
        .declares_entity_type(&connected.identity_source.group_entity_type));
}
