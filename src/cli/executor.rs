//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{FetchCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;

/// Execute a CLI command with the given settings
///
/// Without a subcommand the server is started, as with `serve`.
pub async fn execute_command(cli: &Cli, settings: Settings) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Serve { host, port, dry_run, .. }) => {
            warn_on_privileged_bind(host.as_deref(), *port);
            ServeCommandHandler::new(settings).execute(*dry_run).await
        }
        None => ServeCommandHandler::new(settings).execute(false).await,
        Some(Commands::Fetch { dataset, .. }) => {
            FetchCommandHandler::new(&settings)?.execute(*dataset).await
        }
    }
}

fn warn_on_privileged_bind(host: Option<&str>, port: Option<u16>) {
    if let (Some("0.0.0.0"), Some(port_num)) = (host, port)
        && port_num < 1024
    {
        tracing::warn!(
            port = port_num,
            "Binding to 0.0.0.0 on a port below 1024 typically requires root privileges"
        );
    }
}
