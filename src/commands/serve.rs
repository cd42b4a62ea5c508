use anyhow::Result;
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::cli::ServeArgs;
use crate::config::{Config, ServerConfig};
use crate::server;

/// Resolve the listen address: flags first, then the config file, then defaults
pub fn resolve_listen_addr(args: &ServeArgs, config: Option<&Config>) -> Result<SocketAddr> {
    let base = config.map(|cfg| cfg.server.clone()).unwrap_or_default();
    let server = ServerConfig {
        address: args.address.clone().unwrap_or(base.address),
        port: args.port.unwrap_or(base.port),
    };
    server.socket_addr()
}

/// Serve until Ctrl-C
pub async fn handle_serve(args: &ServeArgs, config: Option<&Config>) -> Result<()> {
    let address = resolve_listen_addr(args, config)?;

    server::serve(address, shutdown_signal(tokio::signal::ctrl_c())).await
}

/// Resolves once `signal` fires. If the handler cannot be installed the
/// server keeps running instead of shutting down at once.
pub async fn shutdown_signal<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Shutting down RPC server"),
        Err(e) => {
            warn!("Cannot listen for Ctrl-C, serving until killed: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
