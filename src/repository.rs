use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::models::{Course, CourseId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Course id must be positive")]
    ZeroId,

    #[error("Duplicate course id: {0}")]
    DuplicateId(CourseId),

    #[error("Course {id}: {reason}")]
    InvalidCourse { id: CourseId, reason: String },
}

impl RepositoryError {
    fn invalid(id: CourseId, reason: impl Into<String>) -> Self {
        Self::InvalidCourse {
            id,
            reason: reason.into(),
        }
    }
}

/// Read-only course collection, fixed at construction.
///
/// Categories and languages are projected from the courses in first-seen
/// order, so they always cover every value present in the data.
#[derive(Debug, Clone)]
pub struct CourseRepository {
    courses: Vec<Course>,
    categories: Vec<String>,
    languages: Vec<String>,
}

impl CourseRepository {
    pub fn new(courses: Vec<Course>) -> Result<Self, RepositoryError> {
        let mut seen = HashSet::new();
        for course in &courses {
            validate_course(course)?;
            if !seen.insert(course.id) {
                return Err(RepositoryError::DuplicateId(course.id));
            }
        }

        let categories = distinct(courses.iter().map(|c| &c.category));
        let languages = distinct(courses.iter().flat_map(|c| c.languages.iter()));

        debug!(
            "course repository built: {} courses, {} categories, {} languages",
            courses.len(),
            categories.len(),
            languages.len()
        );

        Ok(Self {
            courses,
            categories,
            languages,
        })
    }

    pub fn all_courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn find_by_id(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Courses in the same category as `id`, excluding `id`, in repository
    /// order. `None` when `id` is unknown.
    pub fn related(&self, id: CourseId, limit: usize) -> Option<Vec<&Course>> {
        let course = self.find_by_id(id)?;
        Some(
            self.courses
                .iter()
                .filter(|c| c.category == course.category && c.id != id)
                .take(limit)
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

fn validate_course(course: &Course) -> Result<(), RepositoryError> {
    let id = course.id;
    if id == 0 {
        return Err(RepositoryError::ZeroId);
    }
    if course.title.trim().is_empty() {
        return Err(RepositoryError::invalid(id, "title is empty"));
    }
    if course.description.trim().is_empty() {
        return Err(RepositoryError::invalid(id, "description is empty"));
    }
    if course.category.trim().is_empty() {
        return Err(RepositoryError::invalid(id, "category is empty"));
    }
    if course.languages.is_empty() {
        return Err(RepositoryError::invalid(id, "no languages"));
    }
    if course.languages.iter().any(|l| l.trim().is_empty()) {
        return Err(RepositoryError::invalid(id, "blank language name"));
    }

    let mut module_ids = HashSet::new();
    for module in &course.modules {
        if !module_ids.insert(module.id) {
            return Err(RepositoryError::invalid(
                id,
                format!("duplicate module id {}", module.id),
            ));
        }
    }

    Ok(())
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseModule, ModuleKind};
    use crate::source::seed::seed_courses;

    fn course(id: CourseId, category: &str, languages: &[&str]) -> Course {
        Course {
            id,
            title: format!("Course {}", id),
            description: "Something to learn".to_string(),
            image_url: String::new(),
            category: category.to_string(),
            languages: languages.iter().map(|l| l.to_string()).collect(),
            duration: "1 week".to_string(),
            is_offline_available: true,
            instructor: "Instructor".to_string(),
            enrolled_count: 0,
            modules: vec![],
        }
    }

    #[test]
    fn test_find_by_id() {
        let repo = CourseRepository::new(seed_courses()).expect("seed data is valid");

        let course = repo.find_by_id(3).expect("course 3 exists");
        assert_eq!(course.title, "Sustainable Agriculture Practices");
        assert!(repo.find_by_id(999).is_none());
    }

    #[test]
    fn test_all_courses_keeps_definition_order() {
        let repo = CourseRepository::new(seed_courses()).expect("seed data is valid");
        let ids: Vec<CourseId> = repo.all_courses().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_derived_categories_and_languages() {
        let repo = CourseRepository::new(seed_courses()).expect("seed data is valid");

        assert_eq!(
            repo.categories(),
            [
                "Basic Education",
                "Digital Skills",
                "Agriculture",
                "Health",
                "Entrepreneurship"
            ]
        );
        assert_eq!(
            repo.languages(),
            ["English", "Spanish", "Hindi", "French", "Swahili"]
        );
    }

    #[test]
    fn test_derived_lists_cover_unlisted_values() {
        let repo = CourseRepository::new(vec![
            course(1, "Health", &["English"]),
            course(2, "Music", &["Yoruba", "English"]),
        ])
        .expect("valid courses");

        assert_eq!(repo.categories(), ["Health", "Music"]);
        assert_eq!(repo.languages(), ["English", "Yoruba"]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = CourseRepository::new(vec![
            course(1, "Health", &["English"]),
            course(1, "Health", &["English"]),
        ])
        .unwrap_err();

        assert_eq!(err, RepositoryError::DuplicateId(1));
    }

    #[test]
    fn test_rejects_invalid_courses() {
        assert_eq!(
            CourseRepository::new(vec![course(0, "Health", &["English"])]).unwrap_err(),
            RepositoryError::ZeroId
        );

        let err = CourseRepository::new(vec![course(7, "Health", &[])]).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidCourse { id: 7, .. }));

        let mut blank_title = course(8, "Health", &["English"]);
        blank_title.title = "  ".to_string();
        assert!(CourseRepository::new(vec![blank_title]).is_err());
    }

    #[test]
    fn test_rejects_repeated_module_ids() {
        let mut c = course(2, "Health", &["English"]);
        let module = CourseModule {
            id: 1,
            title: "Intro".to_string(),
            duration: "5 min".to_string(),
            kind: ModuleKind::Text,
            is_completed: None,
        };
        c.modules = vec![module.clone(), module];

        let err = CourseRepository::new(vec![c]).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidCourse { id: 2, .. }));
    }

    #[test]
    fn test_related_courses_share_category() {
        let repo = CourseRepository::new(seed_courses()).expect("seed data is valid");

        let related: Vec<CourseId> = repo
            .related(4, 4)
            .expect("course 4 exists")
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(related, vec![6]);

        assert!(repo.related(2, 4).expect("course 2 exists").is_empty());
        assert!(repo.related(999, 4).is_none());
    }

    #[test]
    fn test_related_courses_respects_limit() {
        let repo = CourseRepository::new(vec![
            course(1, "Health", &["English"]),
            course(2, "Health", &["English"]),
            course(3, "Health", &["English"]),
            course(4, "Health", &["English"]),
        ])
        .expect("valid courses");

        let related: Vec<CourseId> = repo
            .related(2, 2)
            .expect("course 2 exists")
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(related, vec![1, 3]);
    }
}
