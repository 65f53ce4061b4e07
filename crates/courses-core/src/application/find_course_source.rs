use std::sync::Arc;

use futures::FutureExt;
use serde::{Deserialize, Serialize};

use crate::domain::{CourseSource, ExternalId};
use crate::error::{ClassifiedError, ValidationError};
use crate::factory::ValidationKind;
use crate::pipeline::{Task, execute_task, parse_action_data, perform_action};
use crate::ports::{ActionLogger, CourseSourceRepository};

use super::RepositoryErrorFactoryRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindCourseSourceDto {
    pub id: String,
}

impl FindCourseSourceDto {
    pub fn parse(dto: FindCourseSourceDto) -> Result<ExternalId, ValidationError> {
        ExternalId::try_new(dto.id)
    }
}

#[derive(Debug, Clone)]
pub struct FindCourseSourceQuery {
    pub dto: FindCourseSourceDto,
}

impl FindCourseSourceQuery {
    pub fn new(dto: FindCourseSourceDto) -> Self {
        Self { dto }
    }
}

pub struct FindCourseSourceHandler {
    source_repository: Arc<dyn CourseSourceRepository>,
    logger: Arc<dyn ActionLogger>,
    error_factory: RepositoryErrorFactoryRef,
}

impl FindCourseSourceHandler {
    pub fn new(
        source_repository: Arc<dyn CourseSourceRepository>,
        logger: Arc<dyn ActionLogger>,
        error_factory: RepositoryErrorFactoryRef,
    ) -> Self {
        Self {
            source_repository,
            logger,
            error_factory,
        }
    }

    pub async fn execute(&self, query: FindCourseSourceQuery) -> Result<CourseSource, ClassifiedError> {
        let logger = self.logger.as_ref();

        let task: Task<'_, CourseSource> = async move {
            // #1. parse the dto
            let id = parse_action_data(
                query.dto,
                FindCourseSourceDto::parse,
                logger,
                Some(ValidationKind::RequestInvalid),
            )?;

            // #2. find the course source
            perform_action(
                id,
                |id| self.source_repository.find_one(id),
                self.error_factory.as_ref(),
                logger,
                "find course source",
            )
            .await
        }
        .boxed();

        execute_task(task).await
    }
}
