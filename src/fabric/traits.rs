//! The platform capabilities the storage accessor relies on

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::Result;
use crate::fabric::models::{FabricItem, FabricWorkspace};

/// Narrow interface over the analytics platform.
///
/// Only two capabilities are required: listing the workspaces visible to the
/// current credentials and listing the items (with sizes) inside one
/// workspace. Both are fallible; callers decide what a failure means.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// List every workspace visible to the current credentials
    async fn list_workspaces(&self) -> Result<Vec<FabricWorkspace>>;

    /// List the items in a workspace
    async fn list_items(&self, workspace_id: &str) -> Result<Vec<FabricItem>>;
}
