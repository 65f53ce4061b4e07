//! The closed set of error kinds every failure is classified into.

use std::fmt;

/// The minimum parts of an error message; extra context is added when raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMessageComponents {
    pub base: &'static str,
    pub action: &'static str,
}

impl ErrorMessageComponents {
    /// Render `"{base}; {context}. {action}."`, or `"{base}. {action}."` without context.
    pub fn format(&self, context: Option<&str>) -> String {
        match context {
            Some(context) => format!("{}; {}. {}.", self.base, context, self.action),
            None => format!("{}. {}.", self.base, self.action),
        }
    }
}

/// Transport-facing grouping of kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorFamily {
    Client,
    Server,
    NotFound,
}

impl ErrorFamily {
    pub fn status(self) -> u16 {
        match self {
            ErrorFamily::Client => 400,
            ErrorFamily::Server => 500,
            ErrorFamily::NotFound => 404,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ErrorFamily::Client => "Bad Request",
            ErrorFamily::Server => "Internal Server Error",
            ErrorFamily::NotFound => "Not Found",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    RequestInvalid,
    InternalRequestInvalid,
    NotYetImplemented,
    RepositoryAuthentication,
    RepositoryItemConflict,
    RepositoryServer,
    RepositoryServerUnavailable,
    SourceInvalid,
    Unknown,
    RepositoryItemNotFound,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 10] = [
        ErrorKind::RequestInvalid,
        ErrorKind::InternalRequestInvalid,
        ErrorKind::NotYetImplemented,
        ErrorKind::RepositoryAuthentication,
        ErrorKind::RepositoryItemConflict,
        ErrorKind::RepositoryServer,
        ErrorKind::RepositoryServerUnavailable,
        ErrorKind::SourceInvalid,
        ErrorKind::Unknown,
        ErrorKind::RepositoryItemNotFound,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::RequestInvalid => "RequestInvalidError",
            ErrorKind::InternalRequestInvalid => "InternalRequestInvalidError",
            ErrorKind::NotYetImplemented => "NotYetImplementedError",
            ErrorKind::RepositoryAuthentication => "RepositoryAuthenticationError",
            ErrorKind::RepositoryItemConflict => "RepositoryItemConflictError",
            ErrorKind::RepositoryServer => "RepositoryServerError",
            ErrorKind::RepositoryServerUnavailable => "RepositoryServerUnavailableError",
            ErrorKind::SourceInvalid => "SourceInvalidError",
            ErrorKind::Unknown => "UnknownError",
            ErrorKind::RepositoryItemNotFound => "RepositoryItemNotFoundError",
        }
    }

    pub fn family(self) -> ErrorFamily {
        match self {
            ErrorKind::RequestInvalid => ErrorFamily::Client,
            ErrorKind::RepositoryItemNotFound => ErrorFamily::NotFound,
            ErrorKind::InternalRequestInvalid
            | ErrorKind::NotYetImplemented
            | ErrorKind::RepositoryAuthentication
            | ErrorKind::RepositoryItemConflict
            | ErrorKind::RepositoryServer
            | ErrorKind::RepositoryServerUnavailable
            | ErrorKind::SourceInvalid
            | ErrorKind::Unknown => ErrorFamily::Server,
        }
    }

    pub fn status(self) -> u16 {
        self.family().status()
    }

    pub fn components(self) -> ErrorMessageComponents {
        let (base, action) = match self {
            ErrorKind::RequestInvalid => (
                "Invalid request",
                "Please review the request and try again",
            ),
            // Contract breakdown between our own services, not a client mistake
            ErrorKind::InternalRequestInvalid => (
                "Invalid internal communication",
                "Please review incoming request formats to this service",
            ),
            ErrorKind::NotYetImplemented => (
                "This feature has not yet been implemented",
                "Please contact the development team",
            ),
            ErrorKind::RepositoryAuthentication => (
                "Unable to authenticate with the repository",
                "Please check the repository credentials",
            ),
            ErrorKind::RepositoryItemConflict => (
                "A matching item already exists",
                "Please check repository for the existing record",
            ),
            ErrorKind::RepositoryServer => (
                "The repository returned an error",
                "Please check the repository logs for details",
            ),
            ErrorKind::RepositoryServerUnavailable => (
                "The repository is currently unavailable",
                "Please try again later",
            ),
            ErrorKind::SourceInvalid => (
                "The source record contains invalid data",
                "Please review the record at its source",
            ),
            ErrorKind::Unknown => (
                "An unknown error occurred",
                "Please review the logs for further details",
            ),
            ErrorKind::RepositoryItemNotFound => (
                "A matching item could not be found",
                "Please check repository for requested record",
            ),
        };
        ErrorMessageComponents { base, action }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_without_context() {
        let message = ErrorKind::RepositoryItemNotFound.components().format(None);
        assert_eq!(
            message,
            "A matching item could not be found. Please check repository for requested record."
        );
    }

    #[test]
    fn test_format_with_context() {
        let message = ErrorKind::RepositoryItemNotFound
            .components()
            .format(Some("id xyz"));
        assert_eq!(
            message,
            "A matching item could not be found; id xyz. Please check repository for requested record."
        );
    }

    #[test]
    fn test_families() {
        assert_eq!(ErrorKind::RequestInvalid.status(), 400);
        assert_eq!(ErrorKind::RepositoryItemNotFound.status(), 404);

        let server = ErrorKind::ALL
            .iter()
            .filter(|kind| kind.family() == ErrorFamily::Server)
            .count();
        assert_eq!(server, 8);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = ErrorKind::ALL.iter().map(|kind| kind.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ErrorKind::ALL.len());
    }
}
