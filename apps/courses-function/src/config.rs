//! Function configuration loaded from environment variables.

use std::env;

use crate::event::FunctionKind;

/// Function configuration.
#[derive(Debug, Clone, Default)]
pub struct FunctionConfig {
    /// Function used when an event does not name one.
    pub default_function: Option<FunctionKind>,
}

impl FunctionConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let default_function = env::var("COURSES_FUNCTION")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .and_then(|value| match value.parse() {
                Ok(kind) => Some(kind),
                Err(error) => {
                    tracing::warn!(%error, "Ignoring COURSES_FUNCTION");
                    None
                }
            });

        Self { default_function }
    }
}
