//! Storage command handlers

use std::sync::Arc;

use log::{debug, info};

use crate::cli::{Cli, Command};
use crate::error::Result;
use crate::fabric::{FabricClient, TokenResolver};
use crate::output::{output_size, output_workspaces, SizeReport, SizeScope};
use crate::ui::{create_spinner, finish_spinner};

use super::accessor::{resolve_id, StorageAccessor};
use super::probe::fixed_probe;
use super::settings::StorageConfig;

/// Build an accessor from CLI arguments.
///
/// A missing token leaves the accessor without a platform client, so every
/// operation answers from the placeholder path instead of failing.
pub fn build_accessor(cli: &Cli) -> StorageAccessor {
    let mut config =
        StorageConfig::new().with_authentication_method(cli.auth_method.as_str());
    if let Some(ws) = &cli.workspace_id {
        config = config.with_workspace_id(ws.as_str());
    }
    if let Some(tenant) = &cli.tenant_id {
        config = config.with_tenant_id(tenant.as_str());
    }
    if let Some(conn) = &cli.connection_string {
        config = config.with_connection_string(conn.as_str());
    }

    debug!(
        "Using {} with authentication method '{}'",
        config,
        config.authentication_method()
    );

    let mut accessor = StorageAccessor::new(config);

    match TokenResolver::new().resolve(cli.token.as_deref()) {
        Ok(token) => {
            let client = match &cli.base_url {
                Some(url) => FabricClient::with_base_url(token, url.clone()),
                None => FabricClient::new(token),
            };
            accessor = accessor.with_client(Arc::new(client));
        }
        Err(e) => debug!("Running without a platform client: {}", e),
    }

    if cli.assume_managed {
        debug!("Managed context forced by --assume-managed");
        accessor = accessor.with_probe(fixed_probe(true));
    }

    accessor
}

/// Run the selected command and print its result
pub async fn run_command(accessor: &StorageAccessor, cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Workspaces => {
            let spinner = create_spinner("Fetching workspaces...", cli.batch);
            let workspaces = accessor.get_workspaces().await;
            finish_spinner(spinner);

            output_workspaces(&workspaces, &cli.output);
        }
        Command::WorkspaceSize { id } => {
            let explicit = id.as_deref();
            let spinner = create_spinner("Calculating workspace size...", cli.batch);
            let result = accessor.get_workspace_total_size(explicit).await;
            finish_spinner(spinner);

            let size = result?;
            let id = resolve_id(explicit, accessor.config().workspace_id()).unwrap_or_default();
            output_size(&SizeReport::new(SizeScope::Workspace, id, size), &cli.output);
        }
        Command::TenantSize { id } => {
            let explicit = id.as_deref();
            let spinner = create_spinner("Calculating tenant size...", cli.batch);
            let result = accessor.get_tenant_total_size(explicit).await;
            finish_spinner(spinner);

            let size = result?;
            let id = resolve_id(explicit, accessor.config().tenant_id()).unwrap_or_default();
            output_size(&SizeReport::new(SizeScope::Tenant, id, size), &cli.output);
        }
    }

    info!("Completed successfully");
    Ok(())
}
