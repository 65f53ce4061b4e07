use crate::error::{ErrorKind, RawError, RepoError};

use super::{ErrorFactory, ErrorMap};

const REPOSITORY_ERROR_MAP: ErrorMap = &[
    (400, ErrorKind::RepositoryServer),
    (401, ErrorKind::RepositoryAuthentication),
    (404, ErrorKind::RepositoryItemNotFound),
    (409, ErrorKind::RepositoryItemConflict),
    (500, ErrorKind::RepositoryServer),
    (503, ErrorKind::RepositoryServerUnavailable),
];

/// Kinds a repository call site may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryKind {
    RepositoryItemConflict,
    RepositoryAuthentication,
    RepositoryItemNotFound,
    RepositoryServer,
    RequestInvalid,
    SourceInvalid,
}

impl From<RepositoryKind> for ErrorKind {
    fn from(kind: RepositoryKind) -> Self {
        match kind {
            RepositoryKind::RepositoryItemConflict => ErrorKind::RepositoryItemConflict,
            RepositoryKind::RepositoryAuthentication => ErrorKind::RepositoryAuthentication,
            RepositoryKind::RepositoryItemNotFound => ErrorKind::RepositoryItemNotFound,
            RepositoryKind::RepositoryServer => ErrorKind::RepositoryServer,
            RepositoryKind::RequestInvalid => ErrorKind::RequestInvalid,
            RepositoryKind::SourceInvalid => ErrorKind::SourceInvalid,
        }
    }
}

/// Factory for repository failures.
///
/// Repositories must hand back shape-valid records, so any validation error
/// coming out of one is a source data problem and always becomes
/// [`ErrorKind::SourceInvalid`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RepositoryErrorFactory;

impl ErrorFactory for RepositoryErrorFactory {
    type Kind = RepositoryKind;

    fn error_map(&self) -> ErrorMap {
        REPOSITORY_ERROR_MAP
    }

    fn status_code(&self, error: &RawError) -> u16 {
        match error {
            RawError::Repository(err) => err.status_code(),
            RawError::Classified(err) => err.status(),
            RawError::Validation(_) | RawError::Other(_) => 500,
        }
    }

    fn description(&self, error: &RawError) -> String {
        match error {
            RawError::Repository(err) => err.detail(),
            other => other.to_string(),
        }
    }

    fn forced_kind(&self, error: &RawError) -> Option<ErrorKind> {
        matches!(
            error,
            RawError::Validation(_) | RawError::Repository(RepoError::Mapping(_))
        )
        .then_some(ErrorKind::SourceInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClassifiedError, ValidationError};

    fn all_raw_errors() -> Vec<RawError> {
        vec![
            RepoError::Connection("refused".into()).into(),
            RepoError::Query("timeout".into()).into(),
            RepoError::BadRequest("bad".into()).into(),
            RepoError::Unauthorized("token".into()).into(),
            RepoError::NotFound("missing".into()).into(),
            RepoError::Conflict("dup".into()).into(),
            RepoError::Unavailable("down".into()).into(),
            ValidationError::new("slug", "must be lowercase").into(),
            RawError::other("something odd"),
            ClassifiedError::new(ErrorKind::NotYetImplemented, None).into(),
        ]
    }

    #[test]
    fn test_status_map() {
        let factory = RepositoryErrorFactory;
        let cases = [
            (RepoError::NotFound("Course 1 not found".into()), ErrorKind::RepositoryItemNotFound),
            (RepoError::Unauthorized("expired".into()), ErrorKind::RepositoryAuthentication),
            (RepoError::BadRequest("bad".into()), ErrorKind::RepositoryServer),
            (RepoError::Query("timeout".into()), ErrorKind::RepositoryServer),
            (RepoError::Unavailable("down".into()), ErrorKind::RepositoryServerUnavailable),
        ];
        for (raw, expected) in cases {
            assert_eq!(factory.classify(raw.into()).kind(), expected);
        }
    }

    #[test]
    fn test_not_found_message_uses_detail() {
        let err = RepositoryErrorFactory.classify(RepoError::NotFound("id xyz".into()).into());
        assert_eq!(
            err.message(),
            "A matching item could not be found; id xyz. Please check repository for requested record."
        );
    }

    #[test]
    fn test_other_errors_default_to_server() {
        let err = RepositoryErrorFactory.classify(RawError::other("socket hang up"));
        assert_eq!(err.kind(), ErrorKind::RepositoryServer);

        let factory = RepositoryErrorFactory;
        assert_eq!(factory.mapped_kind(418), None);
        assert_eq!(factory.mapped_kind(403), None);
    }

    #[test]
    fn test_validation_forces_source_invalid() {
        let factory = RepositoryErrorFactory;
        for explicit in [
            None,
            Some(RepositoryKind::RepositoryItemNotFound),
            Some(RepositoryKind::RequestInvalid),
            Some(RepositoryKind::RepositoryItemConflict),
        ] {
            let raw = ValidationError::new("name", "must not be empty").into();
            assert_eq!(factory.classify_as(raw, explicit).kind(), ErrorKind::SourceInvalid);
        }
    }

    #[test]
    fn test_unnormalized_mapping_error_forces_source_invalid() {
        let factory = RepositoryErrorFactory;
        for explicit in [None, Some(RepositoryKind::RepositoryItemNotFound)] {
            let raw = RawError::Repository(RepoError::Mapping(ValidationError::new(
                "slug",
                "is not valid",
            )));
            assert_eq!(factory.classify_as(raw, explicit).kind(), ErrorKind::SourceInvalid);
        }
    }

    #[test]
    fn test_explicit_kind_wins_over_map() {
        let raw = RepoError::NotFound("gone".into()).into();
        let err = RepositoryErrorFactory.classify_as(raw, Some(RepositoryKind::RepositoryServer));
        assert_eq!(err.kind(), ErrorKind::RepositoryServer);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let factory = RepositoryErrorFactory;
        for raw in all_raw_errors() {
            let once = factory.classify(raw);
            let twice = factory.classify(once.clone().into());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_classification_is_total() {
        let factory = RepositoryErrorFactory;
        for raw in all_raw_errors() {
            let err = factory.classify(raw);
            assert!(ErrorKind::ALL.contains(&err.kind()));
            assert!(!err.message().is_empty());
        }
    }

    #[test]
    fn test_describe() {
        let raw = RepoError::NotFound("Course with id 1 not found".into()).into();
        assert_eq!(
            RepositoryErrorFactory.describe(&raw),
            "404: Course with id 1 not found"
        );
    }
}
