//! Repository implementations - in-memory fakes of the course stores.

mod course_memory;
mod course_source_memory;
mod record;

pub use course_memory::InMemoryCourseRepository;
pub use course_source_memory::InMemoryCourseSourceRepository;
pub use record::CourseRecord;
