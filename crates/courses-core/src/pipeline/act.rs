use std::fmt::Debug;
use std::future::Future;

use crate::error::RawError;
use crate::factory::ErrorFactory;
use crate::ports::ActionLogger;

use super::Outcome;

/// Bring an asynchronous, fallible call into the pipeline.
///
/// The error factory is chosen by the call site, which is what lets the same
/// stage serve repositories with different status mappings.
pub async fn perform_action<I, O, E, F, Fut, EF>(
    input: I,
    call: F,
    error_factory: &EF,
    logger: &dyn ActionLogger,
    label: &str,
) -> Outcome<O>
where
    F: FnOnce(I) -> Fut,
    Fut: Future<Output = Result<O, E>>,
    E: Into<RawError>,
    O: Debug,
    EF: ErrorFactory + ?Sized,
{
    let result = call(input).await.map_err(Into::into);
    log_action(result, error_factory, logger, label)
}

/// Classify and log the result of an action.
///
/// This is the only place logging severity is decided: a not-found outcome is
/// routine and stays at debug, anything else is worth an operator's attention.
pub fn log_action<T, EF>(
    result: Result<T, RawError>,
    error_factory: &EF,
    logger: &dyn ActionLogger,
    label: &str,
) -> Outcome<T>
where
    T: Debug,
    EF: ErrorFactory + ?Sized,
{
    match result {
        Ok(data) => {
            logger.debug(label);
            logger.verbose(&format!("{data:?}"));
            Ok(data)
        }
        Err(error) => {
            let described = error_factory.describe(&error);
            let raw = format!("{}: {error}", error_factory.status_code(&error));
            let classified = error_factory.classify(error);
            if classified.is_not_found() {
                logger.debug(&described);
            } else {
                // full raw text, variant prefix included
                logger.warn(label);
                logger.error(&raw);
            }
            Err(classified)
        }
    }
}
