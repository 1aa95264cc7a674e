//! Plain records returned by the accessor

use serde::Serialize;

use crate::config::placeholders;
use crate::fabric::FabricWorkspace;

/// Workspace as seen by accessor callers
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_capacity_assigned: bool,
    pub capacity_id: Option<String>,
}

impl WorkspaceRecord {
    /// The synthetic workspace returned when real data is unavailable
    pub fn placeholder() -> Self {
        Self {
            id: placeholders::WORKSPACE_ID.to_string(),
            name: placeholders::WORKSPACE_NAME.to_string(),
            description: placeholders::WORKSPACE_DESCRIPTION.to_string(),
            is_capacity_assigned: false,
            capacity_id: None,
        }
    }

    /// Check if this is the fallback record rather than real data
    pub fn is_placeholder(&self) -> bool {
        self.id == placeholders::WORKSPACE_ID
    }
}

impl From<FabricWorkspace> for WorkspaceRecord {
    fn from(ws: FabricWorkspace) -> Self {
        let is_capacity_assigned = ws.is_capacity_assigned();
        let capacity_id = if is_capacity_assigned {
            ws.capacity_id
        } else {
            None
        };

        Self {
            id: ws.id,
            name: ws.display_name,
            description: ws.description.unwrap_or_default(),
            is_capacity_assigned,
            capacity_id,
        }
    }
}
