use thiserror::Error;
use tonic::{Code, Status};

use crate::proto::TestRes;

/// The only way a call can fail: the peer or the transport reported a non-OK status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("call failed with status {code:?}: {message}")]
pub struct CallFailed {
    pub code: Code,
    pub message: String,
}

impl From<Status> for CallFailed {
    fn from(status: Status) -> Self {
        Self {
            code: status.code(),
            message: status.message().to_string(),
        }
    }
}

/// What the completion handler receives: a response or a failure, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutcome {
    Response(TestRes),
    Error(CallFailed),
}

impl CompletionOutcome {
    pub fn from_result(result: Result<tonic::Response<TestRes>, Status>) -> Self {
        match result {
            Ok(response) => Self::Response(response.into_inner()),
            Err(status) if status.code() != Code::Ok => Self::Error(status.into()),
            // An OK status on the error path carries no payload
            Err(_) => Self::Response(TestRes::default()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Response(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_response_is_success() {
        let outcome = CompletionOutcome::from_result(Ok(tonic::Response::new(TestRes {
            msg: "test guy".to_string(),
        })));
        assert_eq!(
            outcome,
            CompletionOutcome::Response(TestRes {
                msg: "test guy".to_string()
            })
        );
        assert!(outcome.is_success());
    }

    #[test]
    fn test_non_ok_status_is_error() {
        let outcome =
            CompletionOutcome::from_result(Err(Status::unavailable("connection refused")));
        assert_eq!(
            outcome,
            CompletionOutcome::Error(CallFailed {
                code: Code::Unavailable,
                message: "connection refused".to_string(),
            })
        );
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_ok_status_on_error_path_is_not_a_failure() {
        let outcome = CompletionOutcome::from_result(Err(Status::new(Code::Ok, "")));
        assert_eq!(outcome, CompletionOutcome::Response(TestRes::default()));
    }

    #[test]
    fn test_call_failed_display_names_code() {
        let failure = CallFailed::from(Status::permission_denied("nope"));
        assert_eq!(
            failure.to_string(),
            "call failed with status PermissionDenied: nope"
        );
    }
}
