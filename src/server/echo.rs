// Echo implementation of the DebtSimplifier service

use tonic::{Request, Response, Status};
use tracing::info;

use crate::proto::{DebtSimplifier, TestReq, TestRes};

#[derive(Debug, Default)]
pub struct EchoService;

#[tonic::async_trait]
impl DebtSimplifier for EchoService {
    async fn test(&self, request: Request<TestReq>) -> Result<Response<TestRes>, Status> {
        let msg = request.into_inner().msg;
        info!("Received test req with {}", msg);
        Ok(Response::new(TestRes { msg }))
    }
}
