use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ResourceError {
    /// The addressed identifier has no row.
    #[error("{kind} not found: id={id}")]
    NotFound { kind: &'static str, id: i64 },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Any store failure, passed through unchanged.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl ResourceError {
    pub fn not_found(kind: &'static str, id: i64) -> Self {
        Self::NotFound { kind, id }
    }
}

pub type ResourceResult<T> = Result<T, ResourceError>;

/// Convert ResourceError to AppError for standardized error responses
impl From<ResourceError> for AppError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { .. } => AppError::NotFound(err.to_string()),
            ResourceError::Validation(errors) => AppError::ValidationError(errors),
            ResourceError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
