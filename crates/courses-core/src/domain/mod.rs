//! Domain entities - the core business objects.

mod course;
mod course_source;
mod value_objects;

pub use course::Course;
pub use course_source::CourseSource;
pub use value_objects::{CourseId, CourseName, ExternalId, Slug, create_slug};
