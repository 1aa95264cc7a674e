//! CLI argument parsing

mod common;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;

/// Workspace and tenant storage sizes for Microsoft Fabric
#[derive(Parser, Debug)]
#[command(name = "workspace-storage")]
#[command(version)]
#[command(
    about = "Report Fabric workspace and tenant storage sizes",
    long_about = "Report Fabric workspace and tenant storage sizes.\n\n\
                  Outside the managed Fabric runtime, or when the API cannot be reached, \
                  placeholder values are printed and a warning is logged."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Default workspace ID
    #[arg(short = 'w', long, env = "FABRIC_WORKSPACE_ID", global = true)]
    pub workspace_id: Option<String>,

    /// Default tenant ID
    #[arg(short = 'T', long, env = "FABRIC_TENANT_ID", global = true)]
    pub tenant_id: Option<String>,

    /// Connection string (kept for context, never parsed)
    #[arg(long, env = "FABRIC_CONNECTION_STRING", hide_env_values = true, global = true)]
    pub connection_string: Option<String>,

    /// Authentication method (default, service_principal, interactive, ...)
    #[arg(long, default_value = defaults::AUTH_METHOD, global = true)]
    pub auth_method: String,

    /// API token (overrides env vars)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Fabric API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Treat this process as running inside the managed Fabric runtime
    #[arg(long, default_value_t = false, global = true)]
    pub assume_managed: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub output: OutputFormat,

    /// Batch mode (no spinner)
    #[arg(short = 'b', long, default_value_t = false, global = true)]
    pub batch: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List workspaces visible to the current credentials
    #[command(visible_alias = "ws")]
    Workspaces,

    /// Total size of all items in a workspace
    #[command(visible_alias = "ws-size")]
    WorkspaceSize {
        /// Workspace ID (defaults to --workspace-id)
        #[arg(value_name = "WORKSPACE_ID")]
        id: Option<String>,
    },

    /// Total size of all workspaces in a tenant
    #[command(visible_alias = "tenant")]
    TenantSize {
        /// Tenant ID (defaults to --tenant-id)
        #[arg(value_name = "TENANT_ID")]
        id: Option<String>,
    },
}
