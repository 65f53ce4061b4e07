//! # Courses Shared
//!
//! Wire types shared between the courses functions and their callers.
//! Nothing here knows about the domain; mapping happens in the function crate.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
