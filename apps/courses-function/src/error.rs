//! Function errors and their translation into RFC 7807 responses.

use thiserror::Error;

use courses_core::error::{ClassifiedError, ErrorFamily, ErrorKind};
use courses_shared::ErrorResponse;

use crate::event::FunctionResponse;

/// Everything that can stop an event from being handled.
#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("Invalid function event: {0}")]
    InvalidEvent(#[from] serde_json::Error),

    #[error("Event names no function and COURSES_FUNCTION is not set")]
    MissingFunction,

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error(transparent)]
    Classified(#[from] ClassifiedError),
}

impl FunctionError {
    /// Envelope problems are a contract breach by the caller, not a bad request.
    pub fn classify(self) -> ClassifiedError {
        match self {
            FunctionError::Classified(error) => error,
            other => {
                ClassifiedError::new(ErrorKind::InternalRequestInvalid, Some(&other.to_string()))
            }
        }
    }
}

/// The problem body for a classified error; server errors keep their detail out.
pub fn problem_for(error: &ClassifiedError) -> ErrorResponse {
    let problem = match error.family() {
        ErrorFamily::Client => ErrorResponse::bad_request(error.message()),
        ErrorFamily::NotFound => ErrorResponse::not_found(error.message()),
        ErrorFamily::Server => ErrorResponse::internal_error(),
    };
    problem.with_type(format!("urn:courses:error:{}", error.kind().name()))
}

pub fn error_response(error: FunctionError, request_id: Option<&str>) -> FunctionResponse {
    let error = error.classify();

    // only server errors need attention
    if error.family() == ErrorFamily::Server {
        tracing::error!(kind = %error.kind(), "{}", error);
    } else {
        tracing::info!(kind = %error.kind(), "{}", error);
    }

    let mut problem = problem_for(&error);
    if let Some(request_id) = request_id {
        problem = problem.with_request_id(request_id);
    }

    FunctionResponse::json(error.status(), &problem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_problem_carries_message() {
        let error = ClassifiedError::new(ErrorKind::RequestInvalid, Some("id is required"));
        let problem = problem_for(&error);
        assert_eq!(problem.status, 400);
        assert_eq!(problem.detail.as_deref(), Some(error.message()));
        assert_eq!(problem.problem_type, "urn:courses:error:RequestInvalidError");
    }

    #[test]
    fn test_server_problem_hides_detail() {
        let error = ClassifiedError::new(ErrorKind::RepositoryItemConflict, Some("Beta ray dancing"));
        let problem = problem_for(&error);
        assert_eq!(problem.status, 500);
        assert_eq!(problem.detail, None);
        assert_eq!(problem.problem_type, "urn:courses:error:RepositoryItemConflictError");
    }

    #[test]
    fn test_envelope_errors_are_internal() {
        let error = FunctionError::UnknownFunction("delete-course".to_string()).classify();
        assert_eq!(error.kind(), ErrorKind::InternalRequestInvalid);
        assert!(error.message().contains("Unknown function: delete-course"));
    }

    #[test]
    fn test_error_response_status_and_request_id() {
        let error = ClassifiedError::new(ErrorKind::RepositoryItemNotFound, Some("id xyz"));
        let response = error_response(error.into(), Some("req-1"));
        assert_eq!(response.status_code, 404);

        let body: ErrorResponse = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body.request_id.as_deref(), Some("req-1"));
        assert_eq!(body.title, "Not Found");
    }
}
