//! # Courses Infrastructure
//!
//! Concrete implementations of the ports defined in `courses-core`:
//! in-memory course and course source repositories seeded with fixtures, and
//! a `tracing`-backed logger for the pipeline.

pub mod fixtures;
pub mod logger;
pub mod repository;

pub use logger::TracingLogger;
pub use repository::{CourseRecord, InMemoryCourseRepository, InMemoryCourseSourceRepository};
