use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::models::{Course, CourseId, CourseQuery};
use crate::repository::CourseRepository;
use crate::services::query_engine::run_query;
use crate::source::CourseSource;

/// Number of related courses shown next to a course.
pub const RELATED_LIMIT: usize = 4;

/// Read entry points over a shared, immutable repository.
#[derive(Debug, Clone)]
pub struct CatalogService {
    repo: Arc<CourseRepository>,
}

impl CatalogService {
    pub fn new(repo: CourseRepository) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    /// Loads and validates the course set from `source`.
    pub async fn from_source(source: &dyn CourseSource) -> Result<Self, AppError> {
        let courses = source.load().await?;
        let repo = CourseRepository::new(courses)?;
        info!("Catalog ready with {} courses", repo.len());
        Ok(Self::new(repo))
    }

    pub fn repository(&self) -> &CourseRepository {
        &self.repo
    }

    pub fn list_courses(&self, query: &CourseQuery) -> Vec<&Course> {
        let result = run_query(self.repo.all_courses(), query);
        if query.has_active_filters() {
            debug!("query {:?} matched {} courses", query, result.len());
        } else {
            debug!("unfiltered listing of {} courses by {:?}", result.len(), query.sort_key);
        }
        result
    }

    pub fn get_course(&self, id: CourseId) -> Result<&Course, AppError> {
        self.repo.find_by_id(id).ok_or_else(|| {
            warn!("course {} not found", id);
            AppError::CourseNotFound(id)
        })
    }

    pub fn related_courses(&self, id: CourseId) -> Result<Vec<&Course>, AppError> {
        self.repo
            .related(id, RELATED_LIMIT)
            .ok_or(AppError::CourseNotFound(id))
    }
}
