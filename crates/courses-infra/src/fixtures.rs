//! Known records the in-memory repositories are seeded with.
//!
//! Each source id exercises one path of the create flow.

use chrono::Utc;

use courses_core::domain::{CourseSource, create_slug};

use crate::repository::CourseRecord;

/// Id of the course that already exists locally.
pub const DEFAULT_COURSE_ID: &str = "1e72ef98-f21e-4e0a-aff1-a45ed7328ae6";

/// Valid id shape, but no source matches it.
pub const DEFAULT_SOURCE_ID: &str = "5008s1234519CjIAAU";

pub const ALPHA_SOURCE_ID: &str = "5000K1234567GEYQA3";
pub const BETA_SOURCE_ID: &str = "5008s000000y7LUAAY";

/// Source whose course has already been created locally.
pub const EXISTING_SOURCE_ID: &str = "ThisSourceExists";

/// Source with an empty name.
pub const INVALID_SOURCE_ID: &str = "InvalidIdForFakeRepo";

/// Source already linked to a course.
pub const LINKED_SOURCE_ID: &str = "SourceWithCourseForFakeRepoId";

/// Source whose local course record is corrupt.
pub const CORRUPT_SOURCE_ID: &str = "CorruptCourseForFakeRepo";

fn source(id: &str, name: &str, course_id: Option<&str>) -> CourseSource {
    CourseSource {
        id: id.to_string(),
        name: name.to_string(),
        course_id: course_id.map(str::to_string),
    }
}

pub fn course_sources() -> Vec<CourseSource> {
    vec![
        source(ALPHA_SOURCE_ID, "Dance, like an alpha", None),
        source(BETA_SOURCE_ID, "Beta ray dancing", None),
        source(EXISTING_SOURCE_ID, "Learn to be a dancer", None),
        source(INVALID_SOURCE_ID, "", None),
        source(
            LINKED_SOURCE_ID,
            "Already associated",
            Some("b0acf835-6fe3-4821-8381-9be7c336dce6"),
        ),
        source(CORRUPT_SOURCE_ID, "Corrupted course", None),
    ]
}

/// The course created earlier from [`EXISTING_SOURCE_ID`].
pub fn existing_course_record() -> CourseRecord {
    let name = "Learn to be a dancer";
    CourseRecord {
        id: DEFAULT_COURSE_ID.to_string(),
        name: name.to_string(),
        slug: create_slug(name),
        external_id: EXISTING_SOURCE_ID.to_string(),
        created_at: Utc::now(),
    }
}

/// A stored course whose slug no longer passes the shape check.
pub fn corrupt_course_record() -> CourseRecord {
    CourseRecord {
        id: "7d0c1a9e-58e4-4b1f-9d0e-3c2b6f1a4e55".to_string(),
        name: "Corrupted course".to_string(),
        slug: "Corrupted Course!".to_string(),
        external_id: CORRUPT_SOURCE_ID.to_string(),
        created_at: Utc::now(),
    }
}

pub fn course_records() -> Vec<CourseRecord> {
    vec![existing_course_record()]
}
