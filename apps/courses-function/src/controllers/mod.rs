//! Controllers - check a request body, call a handler, shape the response.
//!
//! Each controller is one pipeline: parse the body, map it to the handler's
//! DTO, run the handler, map the result. Failures leave as a
//! [`ClassifiedError`](courses_core::ClassifiedError).

mod create_course;
mod find_course;
mod find_course_source;

pub use create_course::CreateCourseController;
pub use find_course::FindCourseController;
pub use find_course_source::FindCourseSourceController;

use serde::de::DeserializeOwned;

use courses_core::error::RawError;

/// Deserialize a request body into its request DTO.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, RawError> {
    serde_json::from_str(body).map_err(RawError::other)
}
