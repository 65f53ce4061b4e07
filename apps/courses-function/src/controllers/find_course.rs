use std::convert::Infallible;
use std::sync::Arc;

use futures::FutureExt;

use courses_core::application::{FindCourseDto, FindCourseHandler, FindCourseQuery};
use courses_core::domain::Course;
use courses_core::error::{ClassifiedError, ValidationError};
use courses_core::factory::ValidationKind;
use courses_core::pipeline::{Task, execute_task, parse_action_data};
use courses_core::ports::ActionLogger;
use courses_shared::dto::{CourseResponse, FindCourseRequest};

use super::parse_body;

pub struct FindCourseRequestMapper;

impl FindCourseRequestMapper {
    /// Surface the most specific identifier given: id, then external id, then slug.
    pub fn to_dto(request: FindCourseRequest) -> Result<FindCourseDto, ValidationError> {
        let FindCourseRequest {
            id,
            external_id,
            slug,
        } = request;
        let given = |value: Option<String>| value.filter(|value| !value.trim().is_empty());

        given(id)
            .map(FindCourseDto::Id)
            .or_else(|| given(external_id).map(FindCourseDto::ExternalId))
            .or_else(|| given(slug).map(FindCourseDto::Slug))
            .ok_or_else(|| {
                ValidationError::new("identifier", "request must include one of: id, externalId, slug")
            })
    }

    pub fn to_response(course: Course) -> Result<CourseResponse, Infallible> {
        Ok(CourseResponse {
            id: course.id.to_string(),
            name: course.name.into(),
            slug: course.slug.into(),
            external_id: course.external_id.into(),
            created_at: course.created_at.to_rfc3339(),
        })
    }
}

pub struct FindCourseController {
    handler: FindCourseHandler,
    logger: Arc<dyn ActionLogger>,
}

impl FindCourseController {
    pub fn new(handler: FindCourseHandler, logger: Arc<dyn ActionLogger>) -> Self {
        Self { handler, logger }
    }

    pub async fn find(&self, body: &str) -> Result<CourseResponse, ClassifiedError> {
        let logger = self.logger.as_ref();

        let task: Task<'_, CourseResponse> = async move {
            // #1. parse the request
            let request = parse_action_data(
                body,
                parse_body::<FindCourseRequest>,
                logger,
                Some(ValidationKind::RequestInvalid),
            )?;

            // #2. transform the request
            let dto = parse_action_data(
                request,
                FindCourseRequestMapper::to_dto,
                logger,
                Some(ValidationKind::RequestInvalid),
            )?;

            // #3. call the query
            let course = self.handler.execute(FindCourseQuery::new(dto)).await?;

            // #4. transform the result
            parse_action_data(course, FindCourseRequestMapper::to_response, logger, None)
        }
        .boxed();

        execute_task(task).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_priority() {
        let request = FindCourseRequest {
            id: None,
            external_id: Some("ThisSourceExists".to_string()),
            slug: Some("learn-to-be-a-dancer".to_string()),
        };
        assert_eq!(
            FindCourseRequestMapper::to_dto(request).unwrap(),
            FindCourseDto::ExternalId("ThisSourceExists".to_string())
        );
    }

    #[test]
    fn test_blank_identifiers_are_ignored() {
        let request = FindCourseRequest {
            id: Some("  ".to_string()),
            external_id: None,
            slug: Some("learn-to-be-a-dancer".to_string()),
        };
        assert_eq!(
            FindCourseRequestMapper::to_dto(request).unwrap(),
            FindCourseDto::Slug("learn-to-be-a-dancer".to_string())
        );
    }

    #[test]
    fn test_no_identifier() {
        let err = FindCourseRequestMapper::to_dto(FindCourseRequest::default()).unwrap_err();
        assert_eq!(err.field, "identifier");
    }
}
