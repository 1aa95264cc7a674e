//! CSV output formatter

use super::common::escape_csv;
use super::{Formatter, SizeReport};
use crate::storage::WorkspaceRecord;

/// Formatter for CSV output
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn workspaces(&self, workspaces: &[WorkspaceRecord]) -> String {
        let mut lines =
            vec!["workspace_id,name,description,is_capacity_assigned,capacity_id".to_string()];

        for ws in workspaces {
            lines.push(format!(
                "{},{},{},{},{}",
                escape_csv(&ws.id),
                escape_csv(&ws.name),
                escape_csv(&ws.description),
                ws.is_capacity_assigned,
                escape_csv(ws.capacity_id.as_deref().unwrap_or(""))
            ));
        }

        lines.join("\n")
    }

    fn size(&self, report: &SizeReport) -> String {
        format!(
            "scope,id,size_bytes\n{},{},{}",
            report.scope,
            escape_csv(&report.id),
            report.size_bytes
        )
    }
}
