//! Value objects - validated building blocks of the course domain.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

const EXTERNAL_ID_MAX_LEN: usize = 64;
const COURSE_NAME_MAX_LEN: usize = 100;

/// Internal identifier of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(Uuid);

impl CourseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn try_new(value: &str) -> Result<Self, ValidationError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| ValidationError::new("id", format!("'{value}' is not a valid UUID")))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CourseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a record in the upstream source system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExternalId(String);

impl ExternalId {
    pub fn try_new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::new("externalId", "must not be empty"));
        }
        if value.len() > EXTERNAL_ID_MAX_LEN {
            return Err(ValidationError::new(
                "externalId",
                format!("must be at most {EXTERNAL_ID_MAX_LEN} characters"),
            ));
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::new(
                "externalId",
                format!("'{value}' must only contain letters and digits"),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ExternalId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ExternalId> for String {
    fn from(id: ExternalId) -> Self {
        id.0
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseName(String);

impl CourseName {
    pub fn try_new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new("name", "must not be empty"));
        }
        if trimmed.chars().count() > COURSE_NAME_MAX_LEN {
            return Err(ValidationError::new(
                "name",
                format!("must be at most {COURSE_NAME_MAX_LEN} characters"),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CourseName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<CourseName> for String {
    fn from(name: CourseName) -> Self {
        name.0
    }
}

impl fmt::Display for CourseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL-friendly handle: lowercase alphanumeric words joined by single dashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    pub fn try_new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let well_formed = !value.is_empty()
            && value.split('-').all(|word| {
                !word.is_empty()
                    && word
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            });
        if !well_formed {
            return Err(ValidationError::new(
                "slug",
                format!("'{value}' is not a valid slug"),
            ));
        }
        Ok(Self(value))
    }

    /// Derive the slug for a course name.
    pub fn from_name(name: &CourseName) -> Result<Self, ValidationError> {
        Self::try_new(create_slug(name.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase, drop apostrophes, and join the remaining alphanumeric runs with `-`.
pub fn create_slug(text: &str) -> String {
    text.to_lowercase()
        .replace(['\'', '’'], "")
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_slug() {
        assert_eq!(create_slug("Learn to be a dancer"), "learn-to-be-a-dancer");
        assert_eq!(create_slug("I'm gonna be a dancer!"), "im-gonna-be-a-dancer");
        assert_eq!(create_slug("  Beta   ray dancing "), "beta-ray-dancing");
        assert_eq!(create_slug("Dance, like an alpha"), "dance-like-an-alpha");
    }

    #[test]
    fn test_slug_validation() {
        assert!(Slug::try_new("learn-to-be-a-dancer").is_ok());
        assert!(Slug::try_new("").is_err());
        assert!(Slug::try_new("Learn").is_err());
        assert!(Slug::try_new("double--dash").is_err());
        assert!(Slug::try_new("-leading").is_err());
    }

    #[test]
    fn test_external_id_validation() {
        assert!(ExternalId::try_new("5008s000000y7LUAAY").is_ok());
        assert!(ExternalId::try_new("").is_err());
        assert!(ExternalId::try_new("not an id").is_err());
        assert!(ExternalId::try_new("x".repeat(65)).is_err());
    }

    #[test]
    fn test_course_name_is_trimmed() {
        let name = CourseName::try_new("  Beta ray dancing ").unwrap();
        assert_eq!(name.as_str(), "Beta ray dancing");
        assert!(CourseName::try_new("   ").is_err());
    }

    #[test]
    fn test_course_id_parse() {
        let id = CourseId::try_new("1e72ef98-f21e-4e0a-aff1-a45ed7328ae6").unwrap();
        assert_eq!(id.to_string(), "1e72ef98-f21e-4e0a-aff1-a45ed7328ae6");

        let err = CourseId::try_new("NotAUUID").unwrap_err();
        assert_eq!(err.field, "id");
    }
}
