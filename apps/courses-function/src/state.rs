//! Function state - the controllers and everything they are wired to.

use std::sync::Arc;

use courses_core::application::{
    CreateCourseHandler, FindCourseHandler, FindCourseSourceHandler, RepositoryErrorFactoryRef,
};
use courses_core::factory::RepositoryErrorFactory;
use courses_core::ports::{ActionLogger, CourseRepository, CourseSourceRepository};
use courses_infra::{InMemoryCourseRepository, InMemoryCourseSourceRepository, TracingLogger};

use crate::controllers::{CreateCourseController, FindCourseController, FindCourseSourceController};

/// Shared function state.
pub struct FunctionState {
    pub find_course: FindCourseController,
    pub find_course_source: FindCourseSourceController,
    pub create_course: CreateCourseController,
}

fn logger(context: &str) -> Arc<dyn ActionLogger> {
    Arc::new(TracingLogger::new(context))
}

impl FunctionState {
    /// Build the state over the given repositories.
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        sources: Arc<dyn CourseSourceRepository>,
    ) -> Self {
        let error_factory: RepositoryErrorFactoryRef = Arc::new(RepositoryErrorFactory);

        let find_course = FindCourseController::new(
            FindCourseHandler::new(
                courses.clone(),
                logger("FindCourseHandler"),
                error_factory.clone(),
            ),
            logger("FindCourseController"),
        );
        let find_course_source = FindCourseSourceController::new(
            FindCourseSourceHandler::new(
                sources.clone(),
                logger("FindCourseSourceHandler"),
                error_factory.clone(),
            ),
            logger("FindCourseSourceController"),
        );
        let create_course = CreateCourseController::new(
            CreateCourseHandler::new(
                courses,
                sources,
                logger("CreateCourseHandler"),
                error_factory,
            ),
            logger("CreateCourseController"),
        );

        Self {
            find_course,
            find_course_source,
            create_course,
        }
    }

    /// State over the seeded in-memory repositories.
    pub fn in_memory() -> Self {
        tracing::info!("No repository configured - using seeded in-memory repositories");
        Self::new(
            Arc::new(InMemoryCourseRepository::seeded()),
            Arc::new(InMemoryCourseSourceRepository::seeded()),
        )
    }
}
