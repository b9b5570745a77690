pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use sea_orm::{ConnAcquireErr, DbErr, SqlErr};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// `path` is empty when the response is built and is filled in by
/// [`crate::http::error_request_path`], which knows the originating request.
///
/// ```json
/// {
///   "timestamp": "2026-01-05T10:15:30.120Z",
///   "status": 404,
///   "error": "NOT_FOUND",
///   "code": 1004,
///   "message": "Department not found: id=42",
///   "path": "/api/departments/42"
/// }
/// ```
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// When the error was produced (UTC)
    pub timestamp: DateTime<Utc>,
    /// HTTP status code
    pub status: u16,
    /// Machine-readable error label
    pub error: String,
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Human-readable error message
    pub message: String,
    /// Request path that produced the error
    pub path: String,
    /// Field-level validation errors, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: code.as_str().to_string(),
            code: code.code(),
            message: message.into(),
            path: String::new(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Option<Value>) -> Self {
        self.details = details;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(&self)).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// Application error type that can be converted to HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl AppError {
    /// Build the response body for this error, logging it at a level that
    /// matches who is at fault.
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = ErrorCode::JsonExtraction.code(), "JSON extraction error: {}", e);
                ErrorResponse::new(e.status(), ErrorCode::JsonExtraction, e.body_text())
            }
            AppError::ValidationError(e) => {
                tracing::info!(error_code = ErrorCode::ValidationError.code(), "Validation error: {}", e);
                ErrorResponse::new(
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    ErrorCode::ValidationError.default_message(),
                )
                .with_details(Some(validation_details(e)))
            }
            AppError::InvalidId(raw) => {
                tracing::info!(error_code = ErrorCode::InvalidId.code(), "Invalid identifier: {}", raw);
                ErrorResponse::new(
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidId,
                    format!("Invalid resource identifier: {raw}"),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                ErrorResponse::new(StatusCode::BAD_REQUEST, ErrorCode::BadRequest, msg.clone())
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                ErrorResponse::new(StatusCode::NOT_FOUND, ErrorCode::NotFound, msg.clone())
            }
            AppError::Conflict(msg) => {
                tracing::info!("Conflict: {}", msg);
                ErrorResponse::new(StatusCode::CONFLICT, ErrorCode::Conflict, msg.clone())
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = ErrorCode::InternalError.code(), "Internal server error: {}", msg);
                ErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    msg.clone(),
                )
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                ErrorResponse::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorCode::ServiceUnavailable,
                    msg.clone(),
                )
            }
            AppError::Database(e) => {
                let (status, code) = classify_db_error(e);
                if status.is_server_error() {
                    tracing::error!(error_code = code.code(), "Database error: {:?}", e);
                } else {
                    tracing::warn!(error_code = code.code(), "Database error: {}", e);
                }
                ErrorResponse::new(status, code, code.default_message())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_error_response().into_response()
    }
}

/// Status and code for a store failure. Driver details stay in the logs.
fn classify_db_error(error: &DbErr) -> (StatusCode, ErrorCode) {
    match error.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) | Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            return (StatusCode::CONFLICT, ErrorCode::DatabaseConstraint);
        }
        _ => {}
    }

    match error {
        DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => {
            (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::DatabasePoolTimeout)
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, ErrorCode::DatabaseConnection)
        }
        DbErr::Exec(_) | DbErr::Query(_) | DbErr::Type(_) | DbErr::Json(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseError)
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseUnhandled),
    }
}

/// `{"field": [{"code", "message", "params"}]}` for each failing field.
///
/// Request bodies are camelCase, so field names are reported the way the
/// client sent them rather than as Rust field names.
fn validation_details(errors: &ValidationErrors) -> Value {
    let fields = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let entries: Vec<Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (json_field_name(field), Value::Array(entries))
        })
        .collect::<serde_json::Map<_, _>>();

    Value::Object(fields)
}

/// `first_name` -> `firstName`
fn json_field_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = !name.is_empty();
        } else if upper_next {
            name.extend(c.to_uppercase());
            upper_next = false;
        } else {
            name.push(c);
        }
    }
    name
}
