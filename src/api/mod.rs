use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

/// `/courses` query string. Set-valued filters are comma separated.
#[derive(Debug, Default, Deserialize)]
pub struct CourseListParams {
    pub search: Option<String>,
    pub categories: Option<String>,
    pub languages: Option<String>,
    #[serde(default)]
    pub offline_only: bool,
    pub availability: Option<String>,
    pub sort: Option<String>,
}

impl CourseListParams {
    pub fn into_query(self) -> Result<CourseQuery, AppError> {
        let mut query = CourseQuery::new().search(self.search.unwrap_or_default());

        query.categories = split_list(self.categories.as_deref());
        query.languages = split_list(self.languages.as_deref());

        query = query.offline_only(self.offline_only);
        if let Some(raw) = self.availability.as_deref() {
            let availability = raw.parse::<Availability>().map_err(AppError::BadRequest)?;
            query = query.availability(availability);
        }

        if let Some(raw) = self.sort.as_deref() {
            query = query.sort_by(raw.parse::<SortKey>().map_err(AppError::BadRequest)?);
        }

        Ok(query)
    }
}

/// A course plus its curriculum progress, served by `/courses/{id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub module_count: usize,
    pub completed_modules: usize,
    pub progress_percent: u8,
}

impl From<&Course> for CourseDetail {
    fn from(course: &Course) -> Self {
        Self {
            module_count: course.module_count(),
            completed_modules: course.completed_modules(),
            progress_percent: course.progress_percent(),
            course: course.clone(),
        }
    }
}

fn split_list(raw: Option<&str>) -> std::collections::BTreeSet<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses))
        .route("/courses/{id}", get(get_course))
        .route("/courses/{id}/related", get(related_courses))
        .route("/categories", get(list_categories))
        .route("/languages", get(list_languages))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_courses(
    State(state): State<AppState>,
    params: Result<Query<CourseListParams>, QueryRejection>,
) -> Result<Json<Vec<Course>>, AppError> {
    let Query(params) = params?;
    let query = params.into_query()?;
    let courses = state
        .catalog
        .list_courses(&query)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(courses))
}

async fn get_course(
    State(state): State<AppState>,
    id: Result<Path<CourseId>, PathRejection>,
) -> Result<Json<CourseDetail>, AppError> {
    let Path(id) = id?;
    let course = state.catalog.get_course(id)?;
    Ok(Json(CourseDetail::from(course)))
}

async fn related_courses(
    State(state): State<AppState>,
    id: Result<Path<CourseId>, PathRejection>,
) -> Result<Json<Vec<Course>>, AppError> {
    let Path(id) = id?;
    let courses = state
        .catalog
        .related_courses(id)?
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(courses))
}

async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.repository().categories().to_vec())
}

async fn list_languages(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.repository().languages().to_vec())
}
