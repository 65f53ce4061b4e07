//! In-memory course repository - the fake used when no real store is wired.

use async_trait::async_trait;
use tokio::sync::RwLock;

use courses_core::domain::{Course, CourseId, ExternalId, Slug};
use courses_core::error::RepoError;
use courses_core::ports::CourseRepository;

use super::record::CourseRecord;
use crate::fixtures;

/// Course repository over a `Vec` of stored records.
///
/// Records are mapped back through [`Course::try_from`] on every read, the way
/// a real adapter's mapper would, so a corrupt row surfaces as a validation
/// error. Data is lost on process restart.
pub struct InMemoryCourseRepository {
    records: RwLock<Vec<CourseRecord>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<CourseRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Seeded with the fixture courses.
    pub fn seeded() -> Self {
        Self::with_records(fixtures::course_records())
    }

    async fn find_where<P>(&self, predicate: P, missing: String) -> Result<Course, RepoError>
    where
        P: Fn(&CourseRecord) -> bool,
    {
        let records = self.records.read().await;
        let record = records
            .iter()
            .find(|record| predicate(record))
            .cloned()
            .ok_or(RepoError::NotFound(missing))?;

        Ok(Course::try_from(record)?)
    }
}

impl Default for InMemoryCourseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_by_id(&self, id: CourseId) -> Result<Course, RepoError> {
        let id = id.to_string();
        self.find_where(
            |record| record.id == id,
            format!("Course with id {id} not found"),
        )
        .await
    }

    async fn find_by_external_id(&self, external_id: ExternalId) -> Result<Course, RepoError> {
        self.find_where(
            |record| record.external_id == external_id.as_str(),
            format!("Course with external id {external_id} not found"),
        )
        .await
    }

    async fn find_by_slug(&self, slug: Slug) -> Result<Course, RepoError> {
        self.find_where(
            |record| record.slug == slug.as_str(),
            format!("Course with slug {slug} not found"),
        )
        .await
    }

    async fn save(&self, course: Course) -> Result<(), RepoError> {
        let mut records = self.records.write().await;
        let record = CourseRecord::from(course);

        match records.iter_mut().find(|existing| existing.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }

        Ok(())
    }

    async fn all(&self) -> Result<Vec<Course>, RepoError> {
        let records = self.records.read().await;
        records
            .iter()
            .cloned()
            .map(|record| Course::try_from(record).map_err(RepoError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courses_core::domain::CourseName;

    #[tokio::test]
    async fn test_find_seeded_course() {
        let repo = InMemoryCourseRepository::seeded();
        let external_id = ExternalId::try_new(fixtures::EXISTING_SOURCE_ID).unwrap();

        let course = repo.find_by_external_id(external_id).await.unwrap();
        assert_eq!(course.name.as_str(), "Learn to be a dancer");
        assert_eq!(course.id.to_string(), fixtures::DEFAULT_COURSE_ID);
    }

    #[tokio::test]
    async fn test_missing_course_is_not_found() {
        let repo = InMemoryCourseRepository::seeded();
        let slug = Slug::try_new("course-doesnt-exist").unwrap();

        let err = repo.find_by_slug(slug).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_corrupt_record_fails_mapping() {
        let repo = InMemoryCourseRepository::with_records(vec![fixtures::corrupt_course_record()]);
        let external_id = ExternalId::try_new(fixtures::CORRUPT_SOURCE_ID).unwrap();

        let err = repo.find_by_external_id(external_id).await.unwrap_err();
        assert!(matches!(err, RepoError::Mapping(_)));
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryCourseRepository::new();
        let course = Course::new(
            CourseName::try_new("Beta ray dancing").unwrap(),
            ExternalId::try_new(fixtures::BETA_SOURCE_ID).unwrap(),
        )
        .unwrap();

        repo.save(course.clone()).await.unwrap();
        let found = repo.find_by_id(course.id).await.unwrap();
        assert_eq!(found, course);

        // saving again replaces rather than duplicates
        repo.save(course).await.unwrap();
        assert_eq!(repo.all().await.unwrap().len(), 1);
    }
}
