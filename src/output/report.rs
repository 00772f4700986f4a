use std::fmt::Write;

use crate::inventory::routes::RouteDescriptor;
use crate::schema::cedar_json::{qualify_entity_type, CedarSchema};

/// Build a markdown report describing the synthesized schema.
pub fn build_report(schema: &CedarSchema, excluded: &[&RouteDescriptor]) -> String {
    let mut report = String::new();

    writeln!(report, "# routes2cedar Synthesis Report").unwrap();
    writeln!(report).unwrap();
    writeln!(report, "Namespace: `{}`", schema.namespace).unwrap();

    // Entity types
    writeln!(report).unwrap();
    writeln!(report, "## Entity Types").unwrap();
    writeln!(report).unwrap();
    writeln!(report, "| Type | Qualified Name | Member Of |").unwrap();
    writeln!(report, "|------|----------------|-----------|").unwrap();
    for (name, declaration) in &schema.declaration.entity_types {
        let parents = if declaration.member_of_types.is_empty() {
            "N/A".to_string()
        } else {
            declaration.member_of_types.join(", ")
        };
        writeln!(
            report,
            "| {} | `{}` | {} |",
            name,
            qualify_entity_type(&schema.namespace, name),
            parents
        )
        .unwrap();
    }

    // Actions
    writeln!(report).unwrap();
    writeln!(report, "## Actions").unwrap();
    writeln!(report).unwrap();
    if schema.declaration.actions.is_empty() {
        writeln!(report, "No routes produced actions; the schema is empty.").unwrap();
    } else {
        writeln!(report, "| Action | Principals | Resources |").unwrap();
        writeln!(report, "|--------|------------|-----------|").unwrap();
        for (id, action) in &schema.declaration.actions {
            writeln!(
                report,
                "| `{}` | {} | {} |",
                id,
                action.applies_to.principal_types.join(", "),
                action.applies_to.resource_types.join(", ")
            )
            .unwrap();
        }
    }

    // Routes outside the authorization surface
    if !excluded.is_empty() {
        writeln!(report).unwrap();
        writeln!(report, "## Routes Outside the Authorization Surface").unwrap();
        writeln!(report).unwrap();
        for route in excluded {
            writeln!(report, "- `{} {}`", route.verb, route.path).unwrap();
        }
    }

    report
}
