use std::convert::Infallible;
use std::sync::Arc;

use futures::FutureExt;

use courses_core::application::{CreateCourseCommand, CreateCourseDto, CreateCourseHandler};
use courses_core::error::ClassifiedError;
use courses_core::factory::ValidationKind;
use courses_core::pipeline::{Task, execute_task, parse_action_data};
use courses_core::ports::ActionLogger;
use courses_shared::dto::CreateCourseRequest;

use super::parse_body;

pub struct CreateCourseRequestMapper;

impl CreateCourseRequestMapper {
    pub fn to_dto(request: CreateCourseRequest) -> Result<CreateCourseDto, Infallible> {
        Ok(CreateCourseDto {
            external_id: request.external_id,
        })
    }
}

pub struct CreateCourseController {
    handler: CreateCourseHandler,
    logger: Arc<dyn ActionLogger>,
}

impl CreateCourseController {
    pub fn new(handler: CreateCourseHandler, logger: Arc<dyn ActionLogger>) -> Self {
        Self { handler, logger }
    }

    pub async fn create(&self, body: &str) -> Result<(), ClassifiedError> {
        let logger = self.logger.as_ref();

        let task: Task<'_, ()> = async move {
            // #1. parse the request
            let request = parse_action_data(
                body,
                parse_body::<CreateCourseRequest>,
                logger,
                Some(ValidationKind::RequestInvalid),
            )?;

            // #2. transform the request
            let dto = parse_action_data(request, CreateCourseRequestMapper::to_dto, logger, None)?;

            // #3. call the command; the handler classifies its own failures
            self.handler.execute(CreateCourseCommand::new(dto)).await
        }
        .boxed();

        execute_task(task).await
    }
}
