//! Error factories - classify raw collaborator errors into the taxonomy.
//!
//! A factory decides the kind in this order:
//!
//! 1. an already classified error is returned unchanged;
//! 2. a kind the factory forces for this error (see [`ErrorFactory::forced_kind`]);
//! 3. the explicit kind asked for by the caller;
//! 4. the kind mapped from the error's status code, or [`ErrorKind::Unknown`].

mod repository;
mod validation;

pub use repository::{RepositoryErrorFactory, RepositoryKind};
pub use validation::{ValidationErrorFactory, ValidationKind};

use crate::error::{ClassifiedError, ErrorKind, RawError};

/// Status code to kind lookup table.
pub type ErrorMap = &'static [(u16, ErrorKind)];

/// Turns any [`RawError`] into a [`ClassifiedError`]. Never fails.
pub trait ErrorFactory: Send + Sync {
    /// Kinds callers may ask for explicitly.
    type Kind: Into<ErrorKind> + Copy;

    fn error_map(&self) -> ErrorMap;

    /// Status-like code used for the map lookup.
    fn status_code(&self, error: &RawError) -> u16;

    /// Context text placed into the classified message.
    fn description(&self, error: &RawError) -> String;

    /// A kind that wins over both the explicit kind and the status map.
    fn forced_kind(&self, _error: &RawError) -> Option<ErrorKind> {
        None
    }

    fn mapped_kind(&self, status: u16) -> Option<ErrorKind> {
        self.error_map()
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, kind)| *kind)
    }

    /// Classify using only the status map.
    fn classify(&self, error: RawError) -> ClassifiedError {
        self.classify_as(error, None)
    }

    fn classify_as(&self, error: RawError, as_kind: Option<Self::Kind>) -> ClassifiedError {
        if let RawError::Classified(known) = error {
            return known;
        }

        let description = self.description(&error);
        let kind = self
            .forced_kind(&error)
            .or_else(|| as_kind.map(Into::into))
            .or_else(|| self.mapped_kind(self.status_code(&error)))
            .unwrap_or(ErrorKind::Unknown);

        ClassifiedError::new(kind, Some(&description))
    }

    /// Diagnostic rendering, `"{status}: {description}"`.
    fn describe(&self, error: &RawError) -> String {
        format!("{}: {}", self.status_code(error), self.description(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RepoError, ValidationError};

    /// Knows a single status code and nothing else.
    struct NotFoundOnlyFactory;

    impl ErrorFactory for NotFoundOnlyFactory {
        type Kind = ErrorKind;

        fn error_map(&self) -> ErrorMap {
            &[(404, ErrorKind::RepositoryItemNotFound)]
        }

        fn status_code(&self, error: &RawError) -> u16 {
            match error {
                RawError::Repository(err) => err.status_code(),
                _ => 500,
            }
        }

        fn description(&self, error: &RawError) -> String {
            error.to_string()
        }
    }

    #[test]
    fn test_unmapped_status_becomes_unknown() {
        let err = NotFoundOnlyFactory.classify(RepoError::Unavailable("down".into()).into());
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert_eq!(
            err.message(),
            "An unknown error occurred; Repository unavailable: down. Please review the logs for further details."
        );
    }

    #[test]
    fn test_mapped_status() {
        let err = NotFoundOnlyFactory.classify(RepoError::NotFound("missing".into()).into());
        assert_eq!(err.kind(), ErrorKind::RepositoryItemNotFound);
    }

    #[test]
    fn test_explicit_kind_skips_map() {
        let raw = ValidationError::new("id", "must be a uuid").into();
        let err = NotFoundOnlyFactory.classify_as(raw, Some(ErrorKind::InternalRequestInvalid));
        assert_eq!(err.kind(), ErrorKind::InternalRequestInvalid);
    }

    #[test]
    fn test_already_classified_is_untouched() {
        let known = ClassifiedError::new(ErrorKind::RepositoryItemConflict, Some("Beta"));
        let err = NotFoundOnlyFactory.classify_as(known.clone().into(), Some(ErrorKind::Unknown));
        assert_eq!(err, known);
    }
}
