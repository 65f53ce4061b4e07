use std::future::Future;

use crate::error::ClassifiedError;

use super::Outcome;

/// Leave the pipeline: the success value, or the classified error raised to
/// the caller in whatever error type it speaks.
pub fn resolve<T, E>(outcome: Outcome<T>) -> Result<T, E>
where
    E: From<ClassifiedError>,
{
    outcome.map_err(E::from)
}

/// Drive a deferred task to completion and resolve it.
///
/// Called exactly once per handler, at the end of its chain.
pub async fn execute_task<T, E, Fut>(task: Fut) -> Result<T, E>
where
    Fut: Future<Output = Outcome<T>>,
    E: From<ClassifiedError>,
{
    resolve(task.await)
}
