//! Raw errors - what collaborators fail with before classification.

use std::convert::Infallible;

use thiserror::Error;

use super::ClassifiedError;

/// Shape validation failure raised by value objects, mappers and DTO checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ValidationError: {field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    Conflict(String),

    #[error("Repository unavailable: {0}")]
    Unavailable(String),

    /// A stored record failed the mapper's shape check on the way out.
    #[error(transparent)]
    Mapping(#[from] ValidationError),
}

impl RepoError {
    /// HTTP-like status the repository would have answered with.
    pub fn status_code(&self) -> u16 {
        match self {
            RepoError::BadRequest(_) => 400,
            RepoError::Unauthorized(_) => 401,
            RepoError::NotFound(_) => 404,
            RepoError::Conflict(_) => 409,
            RepoError::Unavailable(_) => 503,
            RepoError::Connection(_) | RepoError::Query(_) | RepoError::Mapping(_) => 500,
        }
    }

    /// The message carried by the error, without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            RepoError::Connection(msg)
            | RepoError::Query(msg)
            | RepoError::BadRequest(msg)
            | RepoError::Unauthorized(msg)
            | RepoError::NotFound(msg)
            | RepoError::Conflict(msg)
            | RepoError::Unavailable(msg) => msg.clone(),
            RepoError::Mapping(err) => err.to_string(),
        }
    }
}

/// Any failure handed to an error factory.
#[derive(Debug, Error)]
pub enum RawError {
    /// Already carries a taxonomy kind; factories pass it through untouched.
    #[error(transparent)]
    Classified(#[from] ClassifiedError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(RepoError),

    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl RawError {
    pub fn other(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        RawError::Other(error.into())
    }
}

impl From<RepoError> for RawError {
    fn from(error: RepoError) -> Self {
        match error {
            RepoError::Mapping(invalid) => RawError::Validation(invalid),
            other => RawError::Repository(other),
        }
    }
}

impl From<Infallible> for RawError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_error_surfaces_as_validation() {
        let invalid = ValidationError::new("name", "must not be empty");
        let raw: RawError = RepoError::Mapping(invalid).into();
        assert!(matches!(raw, RawError::Validation(_)));
    }

    #[test]
    fn test_repo_status_codes() {
        assert_eq!(RepoError::NotFound("x".into()).status_code(), 404);
        assert_eq!(RepoError::Unauthorized("x".into()).status_code(), 401);
        assert_eq!(RepoError::Query("x".into()).status_code(), 500);
        assert_eq!(RepoError::Unavailable("x".into()).status_code(), 503);
    }

    #[test]
    fn test_detail_drops_prefix() {
        let err = RepoError::Query("timeout".to_string());
        assert_eq!(err.to_string(), "Query execution failed: timeout");
        assert_eq!(err.detail(), "timeout");
    }
}
