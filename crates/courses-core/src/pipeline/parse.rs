use std::any::type_name;
use std::fmt::Debug;

use crate::error::RawError;
use crate::factory::{ErrorFactory, ValidationErrorFactory, ValidationKind};
use crate::ports::ActionLogger;

use super::Outcome;

/// Bring a synchronous, fallible transform into the pipeline.
///
/// Meant for validation and DTO/entity mapping only; the transform must not
/// do I/O. Failures are always classified by the [`ValidationErrorFactory`],
/// as `as_kind` when given.
pub fn parse_action_data<I, O, E, F>(
    input: I,
    transform: F,
    logger: &dyn ActionLogger,
    as_kind: Option<ValidationKind>,
) -> Outcome<O>
where
    I: Debug,
    F: FnOnce(I) -> Result<O, E>,
    E: Into<RawError>,
{
    logger.debug(&format!("parse_action_data: {}", type_name::<F>()));
    logger.verbose(&format!("{input:?}"));

    log_parse(transform(input).map_err(Into::into), logger, as_kind)
}

/// Classify and log the result of a parse step.
///
/// Parse failures are expected and client driven, so they only log at debug.
pub fn log_parse<T>(
    result: Result<T, RawError>,
    logger: &dyn ActionLogger,
    as_kind: Option<ValidationKind>,
) -> Outcome<T> {
    result.map_err(|error| {
        logger.debug(&error.to_string());
        ValidationErrorFactory.classify_as(error, as_kind)
    })
}
