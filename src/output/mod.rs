/// Writes the synthesized schema and report to disk.
pub mod formatter;
/// Builds a markdown synthesis report from the schema and route diagnostics.
pub mod report;
