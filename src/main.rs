//! workspace-storage - Main entry point

use clap::Parser;
use log::{debug, info};

use workspace_storage::{build_accessor, run_command, Cli};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting workspace-storage v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: command={:?}, output={}, assume_managed={}, batch={}",
        cli.command, cli.output, cli.assume_managed, cli.batch
    );

    let accessor = build_accessor(&cli);
    if let Err(e) = run_command(&accessor, &cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
