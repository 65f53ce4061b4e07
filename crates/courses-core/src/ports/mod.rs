//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod logger;
mod repository;

pub use logger::ActionLogger;
pub use repository::{CourseRepository, CourseSourceRepository};
