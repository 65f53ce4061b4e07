use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{CourseId, CourseName, ExternalId, Slug};
use crate::error::ValidationError;

/// Course entity - a course as known to this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub name: CourseName,
    pub slug: Slug,
    pub external_id: ExternalId,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Create a new course with generated ID, slug derived from the name.
    pub fn new(name: CourseName, external_id: ExternalId) -> Result<Self, ValidationError> {
        let slug = Slug::from_name(&name)?;
        Ok(Self {
            id: CourseId::new(),
            name,
            slug,
            external_id,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_course_derives_slug() {
        let course = Course::new(
            CourseName::try_new("Beta ray dancing").unwrap(),
            ExternalId::try_new("5008s000000y7LUAAY").unwrap(),
        )
        .unwrap();
        assert_eq!(course.slug.as_str(), "beta-ray-dancing");
    }

    #[test]
    fn test_name_without_slug_characters_is_rejected() {
        let result = Course::new(
            CourseName::try_new("!!!").unwrap(),
            ExternalId::try_new("5008s000000y7LUAAY").unwrap(),
        );
        assert_eq!(result.unwrap_err().field, "slug");
    }
}
