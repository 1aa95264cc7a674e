//! JSON and YAML output formatters

use serde::Serialize;

use super::{Formatter, SizeReport};
use crate::storage::WorkspaceRecord;

/// Formatter for JSON output
pub struct JsonFormatter;

/// Formatter for YAML output
pub struct YamlFormatter;

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("Error serializing to JSON: {}", e))
}

fn to_yaml<T: Serialize + ?Sized>(value: &T) -> String {
    serde_yml::to_string(value).unwrap_or_else(|e| format!("Error serializing to YAML: {}", e))
}

impl Formatter for JsonFormatter {
    fn workspaces(&self, workspaces: &[WorkspaceRecord]) -> String {
        to_json(workspaces)
    }

    fn size(&self, report: &SizeReport) -> String {
        to_json(report)
    }
}

impl Formatter for YamlFormatter {
    fn workspaces(&self, workspaces: &[WorkspaceRecord]) -> String {
        to_yaml(workspaces)
    }

    fn size(&self, report: &SizeReport) -> String {
        to_yaml(report)
    }
}
