//! Event dispatch - one event in, one response out.

use courses_shared::ApiResponse;

use crate::config::FunctionConfig;
use crate::error::{FunctionError, error_response};
use crate::event::{FunctionEvent, FunctionKind, FunctionResponse};
use crate::state::FunctionState;

/// Handle a raw event. Never fails; errors become problem responses.
pub async fn handle(state: &FunctionState, config: &FunctionConfig, input: &str) -> FunctionResponse {
    let event = match FunctionEvent::parse(input) {
        Ok(event) => event,
        Err(error) => return error_response(error, None),
    };
    tracing::debug!(?event, "Event received");

    let request_id = event.request_id.clone();
    match dispatch(state, config, event).await {
        Ok(response) => response,
        Err(error) => error_response(error, request_id.as_deref()),
    }
}

async fn dispatch(
    state: &FunctionState,
    config: &FunctionConfig,
    event: FunctionEvent,
) -> Result<FunctionResponse, FunctionError> {
    let function: FunctionKind = match event.function.as_deref() {
        Some(name) => name.parse()?,
        None => config.default_function.ok_or(FunctionError::MissingFunction)?,
    };
    let body = event.body.as_deref().unwrap_or("{}");

    tracing::info!(%function, "Handling event");

    let response = match function {
        FunctionKind::FindCourse => {
            let course = state.find_course.find(body).await?;
            FunctionResponse::json(200, &ApiResponse::ok(course))
        }
        FunctionKind::FindCourseSource => {
            let source = state.find_course_source.find(body).await?;
            FunctionResponse::json(200, &ApiResponse::ok(source))
        }
        FunctionKind::CreateCourse => {
            state.create_course.create(body).await?;
            FunctionResponse::json(201, &ApiResponse::done("Course created"))
        }
    };

    Ok(response)
}
