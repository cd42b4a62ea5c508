// RPC server: serves the echo service over native gRPC and gRPC-Web

pub mod echo;

pub use echo::EchoService;

use anyhow::{Context, Result};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic_web::GrpcWebLayer;

use crate::proto::DebtSimplifierServer;

/// Serve on an already-bound listener until `shutdown` resolves.
///
/// HTTP/1.1 is accepted for gRPC-Web; HTTP/2 requests fall through the web
/// layer untouched, so both protocols share the port.
pub async fn serve_with_listener<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let address = listener.local_addr().context("Failed to read listener address")?;
    tracing::info!("RPC server listening on {}", address);

    Server::builder()
        .accept_http1(true)
        .layer(GrpcWebLayer::new())
        .add_service(DebtSimplifierServer::new(EchoService))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
        .context("RPC server failed")?;

    tracing::info!("RPC server on {} stopped", address);
    Ok(())
}

/// Bind `address` and serve until `shutdown` resolves.
pub async fn serve<F>(address: SocketAddr, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind RPC server to {}", address))?;
    serve_with_listener(listener, shutdown).await
}

/// Running server started by [`spawn_server`]
pub struct ServerHandle {
    pub address: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<Result<()>>,
}

impl ServerHandle {
    /// Signal shutdown and wait for the server task to finish
    pub async fn stop(self) -> Result<()> {
        // The receiver is gone only if the server already exited
        let _ = self.shutdown.send(());
        self.handle.await.context("RPC server task panicked")?
    }
}

/// Bind `address` (port 0 picks a free one) and serve in the background.
pub async fn spawn_server(address: SocketAddr) -> Result<ServerHandle> {
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind RPC server to {}", address))?;
    let address = listener.local_addr().context("Failed to read listener address")?;

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(serve_with_listener(listener, async move {
        rx.await.ok();
    }));

    Ok(ServerHandle {
        address,
        shutdown: tx,
        handle,
    })
}
