//! # Courses Core
//!
//! The domain layer of the courses backend: course entities, the error
//! taxonomy and factories, the action pipeline every handler is built from,
//! and the handlers themselves. No infrastructure dependencies.

pub mod application;
pub mod domain;
pub mod error;
pub mod factory;
pub mod pipeline;
pub mod ports;

pub use error::{ClassifiedError, ErrorKind};
pub use pipeline::{Outcome, Task};
