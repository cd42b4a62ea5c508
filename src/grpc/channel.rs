use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use serde::{Deserialize, Serialize};
use std::fmt;
use tonic::body::Body;
use tonic::transport::Channel;
use tonic::{Request, Response, Status};
use tonic_web::{GrpcWebCall, GrpcWebClientLayer, GrpcWebClientService};
use tower::ServiceBuilder;

use crate::grpc::endpoint::Endpoint;
use crate::proto::{DebtSimplifierClient, TestReq, TestRes};

/// Wire protocol used to reach the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Transport {
    /// gRPC-Web over HTTP/1.1, what a browser page speaks
    #[default]
    GrpcWeb,
    /// Native gRPC over HTTP/2
    Grpc,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GrpcWeb => f.write_str("grpc-web"),
            Self::Grpc => f.write_str("grpc"),
        }
    }
}

/// The one RPC this client issues. Implemented by the generated clients and by test doubles.
#[tonic::async_trait]
pub trait RpcChannel: Send {
    async fn test(&mut self, request: Request<TestReq>) -> Result<Response<TestRes>, Status>;
}

pub type WebClient =
    DebtSimplifierClient<GrpcWebClientService<Client<HttpConnector, GrpcWebCall<Body>>>>;

pub type NativeClient = DebtSimplifierClient<Channel>;

#[tonic::async_trait]
impl RpcChannel for WebClient {
    async fn test(&mut self, request: Request<TestReq>) -> Result<Response<TestRes>, Status> {
        DebtSimplifierClient::test(self, request).await
    }
}

#[tonic::async_trait]
impl RpcChannel for NativeClient {
    async fn test(&mut self, request: Request<TestReq>) -> Result<Response<TestRes>, Status> {
        DebtSimplifierClient::test(self, request).await
    }
}

/// Build a channel bound to `endpoint`. Plaintext, no credentials, no default metadata.
///
/// Nothing connects here: both transports dial on the first call, so this must
/// run inside a tokio runtime but never fails.
pub fn create_channel(endpoint: &Endpoint, transport: Transport) -> Box<dyn RpcChannel> {
    tracing::debug!("Creating {} channel to {}", transport, endpoint);

    match transport {
        Transport::GrpcWeb => Box::new(create_web_client(endpoint)),
        Transport::Grpc => Box::new(create_native_client(endpoint)),
    }
}

fn create_web_client(endpoint: &Endpoint) -> WebClient {
    let http: Client<HttpConnector, GrpcWebCall<Body>> =
        Client::builder(TokioExecutor::new()).build_http();

    let service = ServiceBuilder::new()
        .layer(GrpcWebClientLayer::new())
        .service(http);

    DebtSimplifierClient::with_origin(service, endpoint.uri().clone())
}

fn create_native_client(endpoint: &Endpoint) -> NativeClient {
    let channel = Channel::builder(endpoint.uri().clone()).connect_lazy();
    DebtSimplifierClient::new(channel)
}
