// Main entry point for debtsimpl

use anyhow::Result;
use clap::Parser;
use tracing::info;

use debtsimpl::cli::{Cli, Commands, InvokeArgs};
use debtsimpl::commands::{
    handle_completion, handle_init_config, handle_invoke, handle_serve, handle_show_config,
    handle_simplify,
};
use debtsimpl::config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    debtsimpl::logging::init_tracing(cli.verbose);

    // Load configuration from file (if exists)
    let config = config::Config::load();

    if cli.verbose {
        info!("Starting debtsimpl v{}", env!("CARGO_PKG_VERSION"));
    }

    if cli.config {
        handle_show_config(config.as_ref());
        return Ok(());
    }

    if let Some(config_file) = &cli.init_config {
        return handle_init_config(config_file);
    }

    if let Some(shell_type) = &cli.completion {
        return handle_completion(shell_type);
    }

    match &cli.command {
        Some(Commands::Invoke(args)) => handle_invoke(args, config.as_ref()).await.map(|_| ()),
        Some(Commands::Serve(args)) => handle_serve(args, config.as_ref()).await,
        Some(Commands::Simplify(args)) => handle_simplify(args),
        // Implicit invoke, like loading the page
        None => handle_invoke(&InvokeArgs::default(), config.as_ref())
            .await
            .map(|_| ()),
    }
}
