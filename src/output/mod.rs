//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod common;
mod csv;
mod json;
mod table;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::storage::WorkspaceRecord;

pub use self::common::{escape_csv, format_bytes};
pub use self::csv::CsvFormatter;
pub use self::json::{JsonFormatter, YamlFormatter};
pub use self::table::TableFormatter;

/// Trait for output formatters
pub trait Formatter {
    /// Render a list of workspaces
    fn workspaces(&self, workspaces: &[WorkspaceRecord]) -> String;

    /// Render a single size report
    fn size(&self, report: &SizeReport) -> String;
}

/// What a size report measures
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SizeScope {
    Workspace,
    Tenant,
}

impl std::fmt::Display for SizeScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeScope::Workspace => write!(f, "workspace"),
            SizeScope::Tenant => write!(f, "tenant"),
        }
    }
}

/// Total size of a workspace or tenant
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SizeReport {
    pub scope: SizeScope,
    pub id: String,
    pub size_bytes: u64,
}

impl SizeReport {
    pub fn new(scope: SizeScope, id: &str, size_bytes: u64) -> Self {
        Self {
            scope,
            id: id.to_string(),
            size_bytes,
        }
    }
}

fn formatter_for(format: &OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}

/// Print workspaces in the requested format
pub fn output_workspaces(workspaces: &[WorkspaceRecord], format: &OutputFormat) {
    println!("{}", formatter_for(format).workspaces(workspaces));
}

/// Print a size report in the requested format
pub fn output_size(report: &SizeReport, format: &OutputFormat) {
    println!("{}", formatter_for(format).size(report));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_scope_display() {
        assert_eq!(SizeScope::Workspace.to_string(), "workspace");
        assert_eq!(SizeScope::Tenant.to_string(), "tenant");
    }

    #[test]
    fn test_size_report_serialization() {
        let report = SizeReport::new(SizeScope::Tenant, "t-1", 42);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["scope"], "tenant");
        assert_eq!(json["id"], "t-1");
        assert_eq!(json["size_bytes"], 42);
    }

    #[test]
    fn test_every_format_renders_workspaces() {
        let rows = vec![WorkspaceRecord::placeholder()];
        for format in [
            OutputFormat::Table,
            OutputFormat::Csv,
            OutputFormat::Json,
            OutputFormat::Yaml,
        ] {
            let out = formatter_for(&format).workspaces(&rows);
            assert!(
                out.contains("placeholder-workspace-0000"),
                "{} output missing id",
                format
            );
        }
    }
}
