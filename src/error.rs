use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::models::CourseId;
use crate::repository::RepositoryError;
use crate::source::SourceError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Course {0} not found")]
    CourseNotFound(CourseId),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] RepositoryError),

    #[error("Catalog source error: {0}")]
    Source(#[from] SourceError),
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::CourseNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Course {} not found", id))
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Config(msg) => {
                error!("configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::InvalidCatalog(e) => {
                error!("invalid catalog: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Catalog data is invalid".to_string(),
                )
            }
            AppError::Source(e) => {
                error!("catalog source error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Catalog data unavailable".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
