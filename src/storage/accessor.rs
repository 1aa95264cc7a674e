//! Workspace and tenant size accessor with placeholder fallback

use std::fmt;
use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::config::placeholders;
use crate::error::{Result, StorageError};
use crate::fabric::{FabricItem, PlatformClient};
use crate::storage::probe::{environment_probe, ContextProbe};
use crate::storage::records::WorkspaceRecord;
use crate::storage::settings::StorageConfig;

/// Why an operation is answering with placeholder data
#[derive(Debug)]
pub enum FallbackReason {
    /// No platform client was supplied
    ClientUnavailable,
    /// The process is not running inside the managed platform context
    NotManaged,
    /// The platform client failed during the call
    Delegate(StorageError),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::ClientUnavailable => write!(f, "platform client is not available"),
            FallbackReason::NotManaged => {
                write!(f, "not running inside the managed platform context")
            }
            FallbackReason::Delegate(e) => write!(f, "platform call failed: {}", e),
        }
    }
}

/// Lists workspaces and sums workspace and tenant storage.
///
/// Each call probes the environment afresh. When the platform client is
/// present and the managed context is detected, the call is delegated;
/// otherwise, or when the delegate fails, a fixed placeholder is returned and
/// a warning is logged. Only a missing workspace or tenant id is reported as
/// an error.
///
/// The accessor holds no mutable state and caches nothing, so one instance
/// can be shared across tasks.
pub struct StorageAccessor {
    config: StorageConfig,
    client: Option<Arc<dyn PlatformClient>>,
    probe: ContextProbe,
}

impl StorageAccessor {
    /// Create an accessor with no platform client and environment detection
    pub fn new(config: StorageConfig) -> Self {
        debug!(
            "StorageAccessor initialized with workspace_id: {:?}, tenant_id: {:?}",
            config.workspace_id(),
            config.tenant_id()
        );

        Self {
            config,
            client: None,
            probe: environment_probe(),
        }
    }

    /// Supply the platform client to delegate to
    pub fn with_client(mut self, client: Arc<dyn PlatformClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Replace the managed context probe
    pub fn with_probe(mut self, probe: ContextProbe) -> Self {
        self.probe = probe;
        self
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Get the workspaces visible to the current credentials.
    ///
    /// Falls back to a single placeholder record; never fails.
    pub async fn get_workspaces(&self) -> Vec<WorkspaceRecord> {
        info!("Retrieving list of workspaces");

        let outcome = match self.delegate() {
            Ok(client) => client
                .list_workspaces()
                .await
                .map_err(FallbackReason::Delegate),
            Err(reason) => Err(reason),
        };

        match outcome {
            Ok(workspaces) => {
                let records: Vec<WorkspaceRecord> =
                    workspaces.into_iter().map(WorkspaceRecord::from).collect();
                info!("Found {} workspaces", records.len());
                records
            }
            Err(reason) => self.fall_back(
                "get_workspaces",
                reason,
                vec![WorkspaceRecord::placeholder()],
            ),
        }
    }

    /// Get the total size in bytes of all items in a workspace.
    ///
    /// `workspace_id` overrides the configured workspace. Items without a
    /// usable size count as zero.
    pub async fn get_workspace_total_size(&self, workspace_id: Option<&str>) -> Result<u64> {
        let target = resolve_id(workspace_id, self.config.workspace_id())
            .ok_or(StorageError::MissingWorkspaceId)?;

        info!("Calculating total size for workspace: {}", target);

        let outcome = match self.delegate() {
            Ok(client) => workspace_size(client, target)
                .await
                .map_err(FallbackReason::Delegate),
            Err(reason) => Err(reason),
        };

        Ok(match outcome {
            Ok(total) => {
                info!("Workspace {} total size: {} bytes", target, total);
                total
            }
            Err(reason) => self.fall_back(
                "get_workspace_total_size",
                reason,
                placeholders::WORKSPACE_SIZE,
            ),
        })
    }

    /// Get the total size in bytes of every workspace in a tenant.
    ///
    /// `tenant_id` overrides the configured tenant. The total is the sum of
    /// the per-workspace totals over the real workspace list; any failure
    /// along the way yields the tenant placeholder.
    pub async fn get_tenant_total_size(&self, tenant_id: Option<&str>) -> Result<u64> {
        let target = resolve_id(tenant_id, self.config.tenant_id())
            .ok_or(StorageError::MissingTenantId)?;

        info!("Calculating total size for tenant: {}", target);

        let outcome = match self.delegate() {
            Ok(client) => tenant_size(client).await.map_err(FallbackReason::Delegate),
            Err(reason) => Err(reason),
        };

        Ok(match outcome {
            Ok(total) => {
                info!("Tenant {} total size: {} bytes", target, total);
                total
            }
            Err(reason) => self.fall_back(
                "get_tenant_total_size",
                reason,
                placeholders::TENANT_SIZE,
            ),
        })
    }

    /// Probe for a usable platform client
    fn delegate(&self) -> std::result::Result<&dyn PlatformClient, FallbackReason> {
        let client = self
            .client
            .as_deref()
            .ok_or(FallbackReason::ClientUnavailable)?;

        if !(self.probe)() {
            return Err(FallbackReason::NotManaged);
        }

        Ok(client)
    }

    /// Log the fallback and hand back the placeholder.
    ///
    /// Exactly one warning per fallback; delegate failures also log an error.
    fn fall_back<T>(&self, operation: &str, reason: FallbackReason, placeholder: T) -> T {
        if let FallbackReason::Delegate(ref e) = reason {
            error!("{}: unexpected platform error: {}", operation, e);
        }
        warn!("{}: {}; returning placeholder data", operation, reason);
        placeholder
    }
}

impl fmt::Debug for StorageAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageAccessor")
            .field("config", &self.config)
            .field("has_client", &self.client.is_some())
            .finish()
    }
}

impl fmt::Display for StorageAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.config)
    }
}

/// Call-time id wins over the configured one; empty strings count as absent
pub(super) fn resolve_id<'a>(
    explicit: Option<&'a str>,
    configured: Option<&'a str>,
) -> Option<&'a str> {
    explicit
        .filter(|id| !id.is_empty())
        .or_else(|| configured.filter(|id| !id.is_empty()))
}

/// Lenient sum of item sizes
fn sum_item_sizes(items: &[FabricItem]) -> u64 {
    items
        .iter()
        .map(FabricItem::size_bytes)
        .fold(0, u64::saturating_add)
}

async fn workspace_size(client: &dyn PlatformClient, workspace_id: &str) -> Result<u64> {
    let items = client.list_items(workspace_id).await?;
    debug!("Workspace {} has {} items", workspace_id, items.len());
    Ok(sum_item_sizes(&items))
}

async fn tenant_size(client: &dyn PlatformClient) -> Result<u64> {
    let workspaces = client.list_workspaces().await?;
    debug!("Summing sizes across {} workspaces", workspaces.len());

    let mut total: u64 = 0;
    for ws in &workspaces {
        let size = workspace_size(client, &ws.id).await?;
        debug!("Workspace {} contributes {} bytes", ws.id, size);
        total = total.saturating_add(size);
    }
    Ok(total)
}
