use crate::error::{ErrorKind, RawError};

use super::{ErrorFactory, ErrorMap};

const VALIDATION_ERROR_MAP: ErrorMap = &[
    (400, ErrorKind::RequestInvalid),
    (500, ErrorKind::SourceInvalid),
];

/// Kinds a parse step may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    RequestInvalid,
    SourceInvalid,
}

impl From<ValidationKind> for ErrorKind {
    fn from(kind: ValidationKind) -> Self {
        match kind {
            ValidationKind::RequestInvalid => ErrorKind::RequestInvalid,
            ValidationKind::SourceInvalid => ErrorKind::SourceInvalid,
        }
    }
}

/// Factory for parse and mapping failures.
///
/// Every input is treated as a 400, so without an explicit kind a failure
/// classifies as [`ErrorKind::RequestInvalid`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationErrorFactory;

impl ErrorFactory for ValidationErrorFactory {
    type Kind = ValidationKind;

    fn error_map(&self) -> ErrorMap {
        VALIDATION_ERROR_MAP
    }

    fn status_code(&self, _error: &RawError) -> u16 {
        400
    }

    fn description(&self, error: &RawError) -> String {
        error.to_string()
    }
}
