use std::sync::Arc;

use futures::FutureExt;
use serde::{Deserialize, Serialize};

use crate::domain::{Course, CourseName, CourseSource, ExternalId};
use crate::error::{ClassifiedError, ErrorKind, ValidationError};
use crate::factory::ValidationKind;
use crate::pipeline::{Task, execute_task, parse_action_data, perform_action};
use crate::ports::{ActionLogger, CourseRepository, CourseSourceRepository};

use super::RepositoryErrorFactoryRef;

/// The form of data the create command expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    pub external_id: String,
}

pub struct CreateCourseMapper;

impl CreateCourseMapper {
    pub fn to_source_id(dto: CreateCourseDto) -> Result<ExternalId, ValidationError> {
        ExternalId::try_new(dto.external_id)
    }

    /// The identifier a course created from this source would be stored under.
    pub fn from_source_to_external_id(source: &CourseSource) -> Result<ExternalId, ValidationError> {
        ExternalId::try_new(source.id.as_str())
    }

    pub fn from_source_to_course(source: &CourseSource) -> Result<Course, ValidationError> {
        let name = CourseName::try_new(source.name.as_str())?;
        let external_id = ExternalId::try_new(source.id.as_str())?;
        Course::new(name, external_id)
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourseCommand {
    pub dto: CreateCourseDto,
}

impl CreateCourseCommand {
    pub fn new(dto: CreateCourseDto) -> Self {
        Self { dto }
    }
}

/// Creates a course from its upstream source record.
pub struct CreateCourseHandler {
    course_repository: Arc<dyn CourseRepository>,
    source_repository: Arc<dyn CourseSourceRepository>,
    logger: Arc<dyn ActionLogger>,
    error_factory: RepositoryErrorFactoryRef,
}

impl CreateCourseHandler {
    pub fn new(
        course_repository: Arc<dyn CourseRepository>,
        source_repository: Arc<dyn CourseSourceRepository>,
        logger: Arc<dyn ActionLogger>,
        error_factory: RepositoryErrorFactoryRef,
    ) -> Self {
        Self {
            course_repository,
            source_repository,
            logger,
            error_factory,
        }
    }

    pub async fn execute(&self, command: CreateCourseCommand) -> Result<(), ClassifiedError> {
        let logger = self.logger.as_ref();
        let error_factory = self.error_factory.as_ref();

        let task: Task<'_, ()> = async move {
            // #1. parse the dto
            let source_id = parse_action_data(
                command.dto,
                CreateCourseMapper::to_source_id,
                logger,
                Some(ValidationKind::RequestInvalid),
            )?;

            // #2. find the source
            let source = perform_action(
                source_id,
                |id| self.source_repository.find_one(id),
                error_factory,
                logger,
                "find course source",
            )
            .await?;

            // #3. parse the source
            let source = parse_action_data(
                &source,
                CourseSource::check_for_create,
                logger,
                Some(ValidationKind::SourceInvalid),
            )?;
            let external_id = parse_action_data(
                &source,
                CreateCourseMapper::from_source_to_external_id,
                logger,
                Some(ValidationKind::SourceInvalid),
            )?;
            let course = parse_action_data(
                &source,
                CreateCourseMapper::from_source_to_course,
                logger,
                Some(ValidationKind::SourceInvalid),
            )?;

            // #4. check for conflict; finding a course is the failure here
            let existing = perform_action(
                external_id,
                |id| self.course_repository.find_by_external_id(id),
                error_factory,
                logger,
                &format!("check course exists for source: {}", source.id),
            )
            .await;
            let course = match existing {
                Ok(existing) => Err(ClassifiedError::new(
                    ErrorKind::RepositoryItemConflict,
                    Some(existing.name.as_str()),
                )),
                Err(error) if error.is_not_found() => Ok(course),
                Err(error) => Err(error),
            }?;

            // #5. create the course, from the source
            perform_action(
                course,
                |course| self.course_repository.save(course),
                error_factory,
                logger,
                "save course from source",
            )
            .await
        }
        .boxed();

        execute_task(task).await
    }
}
