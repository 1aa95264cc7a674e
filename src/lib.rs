//! workspace-storage - Fabric workspace and tenant storage sizes
//!
//! Lists workspaces and totals workspace and tenant storage through the
//! Fabric REST API. Outside the managed Fabric runtime, or when the API
//! cannot be reached, every operation answers with documented placeholder
//! values instead of failing.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use workspace_storage::{FabricClient, StorageAccessor, StorageConfig};
//!
//! # async fn run() -> workspace_storage::Result<()> {
//! let accessor = StorageAccessor::new(
//!     StorageConfig::new()
//!         .with_workspace_id("my-workspace-id")
//!         .with_tenant_id("my-tenant-id"),
//! )
//! .with_client(Arc::new(FabricClient::new("token".to_string())));
//!
//! let workspaces = accessor.get_workspaces().await;
//! let workspace_bytes = accessor.get_workspace_total_size(None).await?;
//! let tenant_bytes = accessor.get_tenant_total_size(None).await?;
//! # let _ = (workspaces, workspace_bytes, tenant_bytes);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fabric;
pub mod output;
pub mod storage;
pub mod ui;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{Result, StorageError};
pub use fabric::{FabricClient, FabricItem, FabricWorkspace, PlatformClient, TokenResolver};
pub use output::{output_size, output_workspaces, SizeReport, SizeScope};
pub use storage::{
    build_accessor, detect_managed_context, fixed_probe, run_command, AuthMethod, ContextProbe,
    FallbackReason, StorageAccessor, StorageConfig, WorkspaceRecord,
};
