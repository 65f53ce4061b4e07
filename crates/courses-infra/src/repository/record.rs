//! Stored shape of a course, as a storage adapter would hand it back.

use chrono::{DateTime, Utc};

use courses_core::domain::{Course, CourseId, CourseName, ExternalId, Slug};
use courses_core::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub external_id: String,
    pub created_at: DateTime<Utc>,
}

/// Conversion from a stored record to the domain Course; every field is checked.
impl TryFrom<CourseRecord> for Course {
    type Error = ValidationError;

    fn try_from(record: CourseRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CourseId::try_new(&record.id)?,
            name: CourseName::try_new(record.name)?,
            slug: Slug::try_new(record.slug)?,
            external_id: ExternalId::try_new(record.external_id)?,
            created_at: record.created_at,
        })
    }
}

/// Conversion from the domain Course to a stored record.
impl From<Course> for CourseRecord {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.to_string(),
            name: course.name.into(),
            slug: course.slug.into(),
            external_id: course.external_id.into(),
            created_at: course.created_at,
        }
    }
}
