use async_trait::async_trait;

use crate::domain::{Course, CourseId, CourseSource, ExternalId, Slug};
use crate::error::RepoError;

/// Local store of courses.
///
/// Finders fail with [`RepoError::NotFound`] rather than returning `None`, so
/// a missing record flows through the same classification as any failure.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: CourseId) -> Result<Course, RepoError>;

    async fn find_by_external_id(&self, external_id: ExternalId) -> Result<Course, RepoError>;

    async fn find_by_slug(&self, slug: Slug) -> Result<Course, RepoError>;

    async fn save(&self, course: Course) -> Result<(), RepoError>;

    async fn all(&self) -> Result<Vec<Course>, RepoError>;
}

/// Upstream system that courses are created from.
#[async_trait]
pub trait CourseSourceRepository: Send + Sync {
    async fn find_one(&self, id: ExternalId) -> Result<CourseSource, RepoError>;
}
