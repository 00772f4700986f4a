//! CLI entry point for `routes2cedar`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use routes2cedar::inventory::document::InventoryDocument;
use routes2cedar::inventory::RouteInventory;
use routes2cedar::output::formatter;
use routes2cedar::schema::synthesizer;
use routes2cedar::schema::synthesizer::EntityTypeNames;

#[derive(Parser)]
#[command(
    name = "routes2cedar",
    about = "Derive Cedar policy-store schemas from HTTP API route inventories"
)]
struct Cli {
    /// Input route inventory JSON files
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Schema namespace override (defaults to the API name)
    #[arg(long)]
    namespace: Option<String>,

    /// Principal entity type name
    #[arg(long)]
    principal_type: Option<String>,

    /// Group entity type name
    #[arg(long)]
    group_type: Option<String>,

    /// Output directory
    #[arg(long, default_value = "routes2cedar-output")]
    output_dir: PathBuf,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Stage 1: Read and merge inventory documents
    let mut inventory: Option<InventoryDocument> = None;
    for path in &cli.input {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {e}", path.display());
                process::exit(2);
            }
        };
        let document = match InventoryDocument::from_json(&content) {
            Ok(document) => document,
            Err(e) => {
                eprintln!("Error parsing {}: {e}", path.display());
                process::exit(2);
            }
        };
        match &mut inventory {
            Some(merged) => merged.merge(document),
            None => inventory = Some(document),
        }
    }
    let Some(inventory) = inventory else {
        eprintln!("No input inventory files provided");
        process::exit(2);
    };

    let routes = inventory.routes();
    if cli.verbose {
        eprintln!(
            "Parsed {} routes for API '{}'",
            routes.len(),
            inventory.api_name()
        );
    }

    // Stage 2: Derive the namespace
    let namespace = cli
        .namespace
        .clone()
        .unwrap_or_else(|| synthesizer::namespace_from_api_name(inventory.api_name()));

    // Stage 3: Synthesize the schema
    let names = EntityTypeNames::new(cli.principal_type.as_deref(), cli.group_type.as_deref());
    let schema = synthesizer::synthesize_schema(&namespace, &routes, &names);
    let excluded = synthesizer::excluded_routes(&routes);

    if cli.verbose {
        eprintln!(
            "Synthesized {} actions, {} routes outside the authorization surface",
            schema.declaration.actions.len(),
            excluded.len()
        );
        for route in &excluded {
            eprintln!("Excluded route: {} {}", route.verb, route.path);
        }
    }

    // Stage 4: Write output
    // Derive name from first input file
    let name = cli
        .input
        .first()
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    if let Err(e) = formatter::write_output(&cli.output_dir, name, &schema, &excluded) {
        eprintln!("Error writing output: {e}");
        process::exit(2);
    }

    // Exit code signals routes left outside the authorization surface
    if !excluded.is_empty() {
        process::exit(1);
    }
}
