//! `tracing`-backed implementation of the pipeline's logging port.

use courses_core::ports::ActionLogger;

/// Logs through `tracing`, tagging every event with a context name.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    context: String,
}

impl TracingLogger {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

impl ActionLogger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(context = %self.context, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(context = %self.context, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(context = %self.context, "{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!(context = %self.context, "{}", message);
    }

    fn verbose(&self, message: &str) {
        tracing::trace!(context = %self.context, "{}", message);
    }
}
