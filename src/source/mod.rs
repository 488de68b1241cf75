pub mod seed;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::models::Course;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Supplies the course sequence once, at startup.
#[async_trait]
pub trait CourseSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Course>, SourceError>;
}

/// The built-in catalog.
pub struct SeedCourseSource;

#[async_trait]
impl CourseSource for SeedCourseSource {
    async fn load(&self) -> Result<Vec<Course>, SourceError> {
        let courses = seed::seed_courses();
        info!("Loaded {} seed courses", courses.len());
        Ok(courses)
    }
}

/// A JSON array of courses on disk, in the same camelCase shape the API
/// serves.
pub struct JsonFileCourseSource {
    path: PathBuf,
}

impl JsonFileCourseSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CourseSource for JsonFileCourseSource {
    async fn load(&self) -> Result<Vec<Course>, SourceError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        let courses: Vec<Course> =
            serde_json::from_str(&body).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        info!("Loaded {} courses from {}", courses.len(), self.path.display());
        Ok(courses)
    }
}
