// gRPC client module

pub mod channel;
pub mod endpoint;
pub mod invoker;
pub mod outcome;

pub use channel::{NativeClient, RpcChannel, Transport, WebClient, create_channel};
pub use endpoint::{Endpoint, EndpointError, RPC_PORT};
pub use invoker::{Completion, REQUEST_MESSAGE, RequestInvoker, build_request, handle_completion};
pub use outcome::{CallFailed, CompletionOutcome};
