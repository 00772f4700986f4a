use std::path::{Component, Path};

use crate::inventory::routes::RouteDescriptor;
use crate::output::report;
use crate::schema::cedar_json::CedarSchema;

/// Write all output files to the specified directory.
pub fn write_output(
    output_dir: &Path,
    name: &str,
    schema: &CedarSchema,
    excluded: &[&RouteDescriptor],
) -> Result<(), String> {
    validate_output_name(name)?;

    std::fs::create_dir_all(output_dir)
        .map_err(|e| format!("Failed to create output directory: {e}"))?;

    // Write .cedarschema.json
    let schema_path = output_dir.join(format!("{name}.cedarschema.json"));
    let schema_content = serde_json::to_string_pretty(&schema.to_json())
        .map_err(|e| format!("Failed to serialize schema: {e}"))?;
    std::fs::write(&schema_path, &schema_content)
        .map_err(|e| format!("Failed to write {}: {e}", schema_path.display()))?;

    // Write _report.md
    let report_path = output_dir.join(format!("{name}_report.md"));
    let report_content = report::build_report(schema, excluded);
    std::fs::write(&report_path, &report_content)
        .map_err(|e| format!("Failed to write {}: {e}", report_path.display()))?;

    Ok(())
}

fn validate_output_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Output name must not be empty".to_string());
    }
    let candidate = Path::new(name);
    if candidate.is_absolute() {
        return Err(format!(
            "Invalid output name '{name}': absolute paths are not allowed"
        ));
    }
    if candidate.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    }) {
        return Err(format!(
            "Invalid output name '{name}': traversal segments are not allowed"
        ));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(format!(
            "Invalid output name '{name}': path separators are not allowed"
        ));
    }
    Ok(())
}
