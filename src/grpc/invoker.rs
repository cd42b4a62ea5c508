use tokio::task::JoinHandle;
use tonic::Request;
use tracing::{Instrument, debug, error, info};

use crate::grpc::channel::{RpcChannel, Transport, create_channel};
use crate::grpc::endpoint::{Endpoint, EndpointError};
use crate::grpc::outcome::{CallFailed, CompletionOutcome};
use crate::proto::TestReq;

/// Message carried by every request.
pub const REQUEST_MESSAGE: &str = "test guy";

/// Terminal state of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Succeeded(String),
    Failed(CallFailed),
}

enum ChannelSource {
    Connect(Transport),
    Provided(Box<dyn RpcChannel>),
}

/// Sends one `Test` request and logs how it ended.
///
/// An invoker is idle until [`invoke`](Self::invoke) or [`run`](Self::run)
/// consumes it, so a second send is impossible.
pub struct RequestInvoker {
    endpoint: Endpoint,
    channel: ChannelSource,
}

impl RequestInvoker {
    /// Target the service on `hostname`, reached over `transport`.
    pub fn new(hostname: &str, transport: Transport) -> Result<Self, EndpointError> {
        Ok(Self::for_endpoint(Endpoint::for_hostname(hostname)?, transport))
    }

    pub fn for_endpoint(endpoint: Endpoint, transport: Transport) -> Self {
        Self {
            endpoint,
            channel: ChannelSource::Connect(transport),
        }
    }

    /// Use an already-built channel instead of dialing `hostname`.
    pub fn with_channel(
        hostname: &str,
        channel: Box<dyn RpcChannel>,
    ) -> Result<Self, EndpointError> {
        Ok(Self {
            endpoint: Endpoint::for_hostname(hostname)?,
            channel: ChannelSource::Provided(channel),
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Fire and forget: the call runs on the current runtime and the caller
    /// may drop the handle.
    pub fn invoke(self) -> JoinHandle<Completion> {
        tokio::spawn(self.run().in_current_span())
    }

    /// Send the request and wait for its completion.
    pub async fn run(self) -> Completion {
        let mut channel = match self.channel {
            ChannelSource::Connect(transport) => create_channel(&self.endpoint, transport),
            ChannelSource::Provided(channel) => channel,
        };

        debug!("Sending test request to {}", self.endpoint);
        let result = channel.test(build_request()).await;

        handle_completion(CompletionOutcome::from_result(result))
    }
}

/// A fresh request with the fixed message and no metadata.
pub fn build_request() -> Request<TestReq> {
    Request::new(TestReq {
        msg: REQUEST_MESSAGE.to_string(),
    })
}

/// Log the outcome. Failure is terminal; nothing is retried.
pub fn handle_completion(outcome: CompletionOutcome) -> Completion {
    match outcome {
        CompletionOutcome::Error(failure) => {
            error!("Test request failed: {}", failure);
            Completion::Failed(failure)
        }
        CompletionOutcome::Response(response) => {
            info!("Got response : {}", response.msg);
            Completion::Succeeded(response.msg)
        }
    }
}
