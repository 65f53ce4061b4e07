use std::convert::Infallible;
use std::sync::Arc;

use futures::FutureExt;

use courses_core::application::{FindCourseSourceDto, FindCourseSourceHandler, FindCourseSourceQuery};
use courses_core::domain::CourseSource;
use courses_core::error::ClassifiedError;
use courses_core::factory::ValidationKind;
use courses_core::pipeline::{Task, execute_task, parse_action_data};
use courses_core::ports::ActionLogger;
use courses_shared::dto::{CourseSourceResponse, FindCourseSourceRequest};

use super::parse_body;

pub struct FindCourseSourceRequestMapper;

impl FindCourseSourceRequestMapper {
    pub fn to_dto(request: FindCourseSourceRequest) -> Result<FindCourseSourceDto, Infallible> {
        Ok(FindCourseSourceDto { id: request.id })
    }

    pub fn to_response(source: CourseSource) -> Result<CourseSourceResponse, Infallible> {
        Ok(CourseSourceResponse {
            id: source.id,
            name: source.name,
            course_id: source.course_id,
        })
    }
}

pub struct FindCourseSourceController {
    handler: FindCourseSourceHandler,
    logger: Arc<dyn ActionLogger>,
}

impl FindCourseSourceController {
    pub fn new(handler: FindCourseSourceHandler, logger: Arc<dyn ActionLogger>) -> Self {
        Self { handler, logger }
    }

    pub async fn find(&self, body: &str) -> Result<CourseSourceResponse, ClassifiedError> {
        let logger = self.logger.as_ref();

        let task: Task<'_, CourseSourceResponse> = async move {
            // #1. parse the request
            let request = parse_action_data(
                body,
                parse_body::<FindCourseSourceRequest>,
                logger,
                Some(ValidationKind::RequestInvalid),
            )?;

            // #2. transform the request
            let dto = parse_action_data(request, FindCourseSourceRequestMapper::to_dto, logger, None)?;

            // #3. call the query
            let source = self
                .handler
                .execute(FindCourseSourceQuery::new(dto))
                .await?;

            // #4. transform the result
            parse_action_data(source, FindCourseSourceRequestMapper::to_response, logger, None)
        }
        .boxed();

        execute_task(task).await
    }
}
