//! Application layer - command and query handlers built on the action pipeline.
//!
//! Each handler owns its collaborators explicitly: repositories, a logger and
//! the error factory its repository calls are classified with.

mod create_course;
mod find_course;
mod find_course_source;

pub use create_course::{CreateCourseCommand, CreateCourseDto, CreateCourseHandler, CreateCourseMapper};
pub use find_course::{CourseIdentifier, FindCourseDto, FindCourseHandler, FindCourseQuery};
pub use find_course_source::{FindCourseSourceDto, FindCourseSourceHandler, FindCourseSourceQuery};

use std::sync::Arc;

use crate::factory::{ErrorFactory, RepositoryKind};

/// Error factory used for repository calls.
pub type RepositoryErrorFactoryRef = Arc<dyn ErrorFactory<Kind = RepositoryKind>>;
