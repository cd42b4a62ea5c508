// Top-level view that mounts the request invoker

use tokio::task::JoinHandle;

use crate::grpc::{Completion, EndpointError, RequestInvoker, RpcChannel, Transport};

/// Result of rendering the view: the markup and the call it kicked off.
pub struct Rendered {
    pub output: String,
    pub pending: JoinHandle<Completion>,
}

/// The view renders an empty placeholder; the call it starts only logs.
pub struct App {
    invoker: RequestInvoker,
}

impl App {
    pub fn new(hostname: &str, transport: Transport) -> Result<Self, EndpointError> {
        Ok(Self {
            invoker: RequestInvoker::new(hostname, transport)?,
        })
    }

    pub fn with_channel(
        hostname: &str,
        channel: Box<dyn RpcChannel>,
    ) -> Result<Self, EndpointError> {
        Ok(Self {
            invoker: RequestInvoker::with_channel(hostname, channel)?,
        })
    }

    pub fn render(self) -> Rendered {
        let pending = self.invoker.invoke();
        Rendered {
            output: String::new(),
            pending,
        }
    }
}
