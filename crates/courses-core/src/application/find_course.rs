use std::sync::Arc;

use futures::FutureExt;
use serde::{Deserialize, Serialize};

use crate::domain::{Course, CourseId, ExternalId, Slug};
use crate::error::{ClassifiedError, ValidationError};
use crate::factory::ValidationKind;
use crate::pipeline::{Task, execute_task, parse_action_data, perform_action};
use crate::ports::{ActionLogger, CourseRepository};

use super::RepositoryErrorFactoryRef;

/// Which identifier to look a course up by, still unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "identifier", content = "value", rename_all = "camelCase")]
pub enum FindCourseDto {
    Id(String),
    ExternalId(String),
    Slug(String),
}

/// A checked identifier; each variant has its own finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseIdentifier {
    Id(CourseId),
    ExternalId(ExternalId),
    Slug(Slug),
}

impl FindCourseDto {
    pub fn parse(dto: FindCourseDto) -> Result<CourseIdentifier, ValidationError> {
        match dto {
            FindCourseDto::Id(value) => CourseId::try_new(&value).map(CourseIdentifier::Id),
            FindCourseDto::ExternalId(value) => {
                ExternalId::try_new(value).map(CourseIdentifier::ExternalId)
            }
            FindCourseDto::Slug(value) => Slug::try_new(value).map(CourseIdentifier::Slug),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FindCourseQuery {
    pub dto: FindCourseDto,
}

impl FindCourseQuery {
    pub fn new(dto: FindCourseDto) -> Self {
        Self { dto }
    }
}

pub struct FindCourseHandler {
    course_repository: Arc<dyn CourseRepository>,
    logger: Arc<dyn ActionLogger>,
    error_factory: RepositoryErrorFactoryRef,
}

impl FindCourseHandler {
    pub fn new(
        course_repository: Arc<dyn CourseRepository>,
        logger: Arc<dyn ActionLogger>,
        error_factory: RepositoryErrorFactoryRef,
    ) -> Self {
        Self {
            course_repository,
            logger,
            error_factory,
        }
    }

    pub async fn execute(&self, query: FindCourseQuery) -> Result<Course, ClassifiedError> {
        let logger = self.logger.as_ref();
        let repository = self.course_repository.as_ref();

        let task: Task<'_, Course> = async move {
            // #1. parse the identifier
            let identifier = parse_action_data(
                query.dto,
                FindCourseDto::parse,
                logger,
                Some(ValidationKind::RequestInvalid),
            )?;

            // #2. find the course with the matching finder
            perform_action(
                identifier,
                |identifier| match identifier {
                    CourseIdentifier::Id(id) => repository.find_by_id(id),
                    CourseIdentifier::ExternalId(id) => repository.find_by_external_id(id),
                    CourseIdentifier::Slug(slug) => repository.find_by_slug(slug),
                },
                self.error_factory.as_ref(),
                logger,
                "find course",
            )
            .await
        }
        .boxed();

        execute_task(task).await
    }
}
