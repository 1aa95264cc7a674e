//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::format_bytes;
use super::{Formatter, SizeReport};
use crate::storage::WorkspaceRecord;

/// Formatter for ASCII table output
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn workspaces(&self, workspaces: &[WorkspaceRecord]) -> String {
        let mut table = Table::new();
        table.load_preset(NOTHING).set_header(vec![
            "Workspace ID",
            "Name",
            "Description",
            "Capacity",
            "Capacity ID",
        ]);

        for ws in workspaces {
            let assigned = if ws.is_capacity_assigned { "Yes" } else { "No" };
            table.add_row(vec![
                ws.id.as_str(),
                ws.name.as_str(),
                ws.description.as_str(),
                assigned,
                ws.capacity_id.as_deref().unwrap_or("-"),
            ]);
        }

        table.to_string()
    }

    fn size(&self, report: &SizeReport) -> String {
        let mut table = Table::new();
        table
            .load_preset(NOTHING)
            .set_header(vec!["Scope", "ID", "Size (bytes)", "Size"]);
        table.add_row(vec![
            report.scope.to_string(),
            report.id.clone(),
            report.size_bytes.to_string(),
            format_bytes(report.size_bytes),
        ]);
        table.to_string()
    }
}
