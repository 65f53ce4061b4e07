//! Action pipeline.
//!
//! Every handler has the same shape: parse the input, call a fallible
//! collaborator, classify whatever goes wrong, log, and hand back a single
//! typed outcome. Stages are plain functions chained with `?` inside one
//! async block; the first failure short-circuits the rest. The block is then
//! driven exactly once by [`execute_task`].
//!
//! An [`Outcome`] is a `Result`, so `map`, `and_then` and `map_err` are the
//! map, chain and error-map of the algebra.

mod act;
mod parse;
mod run;

pub use act::{log_action, perform_action};
pub use parse::{log_parse, parse_action_data};
pub use run::{execute_task, resolve};

use futures::future::BoxFuture;

use crate::error::ClassifiedError;

/// Result of a pipeline stage.
pub type Outcome<T> = Result<T, ClassifiedError>;

/// A deferred chain of stages; nothing runs until it is awaited.
pub type Task<'a, T> = BoxFuture<'a, Outcome<T>>;
