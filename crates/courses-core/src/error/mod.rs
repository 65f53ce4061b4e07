//! Error taxonomy.
//!
//! Collaborators fail with a [`RawError`]; error factories turn it into a
//! [`ClassifiedError`] carrying exactly one [`ErrorKind`].

mod kind;
mod raw;

pub use kind::{ErrorFamily, ErrorKind, ErrorMessageComponents};
pub use raw::{RawError, RepoError, ValidationError};

use thiserror::Error;

/// An error that already belongs to the taxonomy.
///
/// The message is formatted once, at construction, and never re-wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClassifiedError {
    kind: ErrorKind,
    message: String,
}

impl ClassifiedError {
    pub fn new(kind: ErrorKind, context: Option<&str>) -> Self {
        Self {
            kind,
            message: kind.components().format(context),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn family(&self) -> ErrorFamily {
        self.kind.family()
    }

    pub fn status(&self) -> u16 {
        self.kind.status()
    }

    pub fn is_not_found(&self) -> bool {
        self.family() == ErrorFamily::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classified_error_carries_formatted_message() {
        let err = ClassifiedError::new(ErrorKind::SourceInvalid, Some("name must not be empty"));
        assert_eq!(err.kind(), ErrorKind::SourceInvalid);
        assert_eq!(err.status(), 500);
        assert_eq!(
            err.to_string(),
            "The source record contains invalid data; name must not be empty. Please review the record at its source."
        );
    }

    #[test]
    fn test_not_found_family() {
        assert!(ClassifiedError::new(ErrorKind::RepositoryItemNotFound, None).is_not_found());
        assert!(!ClassifiedError::new(ErrorKind::Unknown, None).is_not_found());
    }
}
