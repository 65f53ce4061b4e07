//! In-memory course source repository - stands in for the upstream system.

use async_trait::async_trait;
use tokio::sync::RwLock;

use courses_core::domain::{CourseSource, ExternalId};
use courses_core::error::RepoError;
use courses_core::ports::CourseSourceRepository;

use crate::fixtures;

/// Hands sources back exactly as stored; checking them is the caller's job.
pub struct InMemoryCourseSourceRepository {
    sources: RwLock<Vec<CourseSource>>,
}

impl InMemoryCourseSourceRepository {
    pub fn with_sources(sources: Vec<CourseSource>) -> Self {
        Self {
            sources: RwLock::new(sources),
        }
    }

    /// Seeded with the fixture sources.
    pub fn seeded() -> Self {
        Self::with_sources(fixtures::course_sources())
    }
}

impl Default for InMemoryCourseSourceRepository {
    fn default() -> Self {
        Self::with_sources(Vec::new())
    }
}

#[async_trait]
impl CourseSourceRepository for InMemoryCourseSourceRepository {
    async fn find_one(&self, id: ExternalId) -> Result<CourseSource, RepoError> {
        let sources = self.sources.read().await;
        sources
            .iter()
            .find(|source| source.id == id.as_str())
            .cloned()
            .ok_or_else(|| RepoError::NotFound(format!("Course source with id {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_seeded_source() {
        let repo = InMemoryCourseSourceRepository::seeded();
        let id = ExternalId::try_new(fixtures::BETA_SOURCE_ID).unwrap();

        let source = repo.find_one(id).await.unwrap();
        assert_eq!(source.name, "Beta ray dancing");
        assert_eq!(source.course_id, None);
    }

    #[tokio::test]
    async fn test_unknown_source_is_not_found() {
        let repo = InMemoryCourseSourceRepository::seeded();
        let id = ExternalId::try_new(fixtures::DEFAULT_SOURCE_ID).unwrap();

        let err = repo.find_one(id).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Course source with id {} not found", fixtures::DEFAULT_SOURCE_ID)
        );
    }

    #[tokio::test]
    async fn test_invalid_source_is_returned_unchecked() {
        let repo = InMemoryCourseSourceRepository::seeded();
        let id = ExternalId::try_new(fixtures::INVALID_SOURCE_ID).unwrap();

        let source = repo.find_one(id).await.unwrap();
        assert!(source.name.is_empty());
    }
}
