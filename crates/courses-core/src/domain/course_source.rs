use serde::{Deserialize, Serialize};

use super::value_objects::{CourseName, ExternalId};
use crate::error::ValidationError;

/// A course record as the upstream source system hands it over.
///
/// Unchecked: every field is exactly what upstream sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSource {
    pub id: String,
    pub name: String,
    /// Set once the source has been linked to one of our courses.
    pub course_id: Option<String>,
}

impl CourseSource {
    /// Check that the source can seed a brand new course.
    pub fn check_for_create(source: &CourseSource) -> Result<CourseSource, ValidationError> {
        ExternalId::try_new(source.id.as_str())?;
        CourseName::try_new(source.name.as_str())?;
        if let Some(course_id) = &source.course_id {
            return Err(ValidationError::new(
                "courseId",
                format!("is already associated with course {course_id}"),
            ));
        }
        Ok(source.clone())
    }
}
