//! Error codes carried by every error body.
//!
//! Each code has a string form for clients (`"VALIDATION_ERROR"`), an
//! integer form for logs and dashboards (`1001`) and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request payload violated a declared constraint
    ValidationError,
    /// Path identifier is not a non-negative integer
    InvalidId,
    /// Request body could not be read as JSON
    JsonExtraction,
    /// Addressed resource does not exist
    NotFound,
    BadRequest,
    Conflict,
    MethodNotAllowed,

    // Server errors
    InternalError,
    ServiceUnavailable,

    // Database errors (2000-2999)
    /// Statement failed to execute or its result could not be read
    DatabaseError,
    /// Could not reach the database
    DatabaseConnection,
    /// Unique or foreign-key constraint rejected the statement
    DatabaseConstraint,
    /// No pooled connection became available in time
    DatabasePoolTimeout,
    DatabaseUnhandled,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::Conflict => "CONFLICT",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::DatabaseConnection => "DATABASE_CONNECTION",
            Self::DatabaseConstraint => "DATABASE_CONSTRAINT",
            Self::DatabasePoolTimeout => "DATABASE_POOL_TIMEOUT",
            Self::DatabaseUnhandled => "DATABASE_UNHANDLED",
        }
    }

    /// Integer code for structured logs.
    ///
    /// - 1000-1999: client errors
    /// - 2000-2999: database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::BadRequest => 1006,
            Self::Conflict => 1008,
            Self::ServiceUnavailable => 1011,
            Self::MethodNotAllowed => 1012,

            Self::DatabaseError => 2003,
            Self::DatabaseConnection => 2004,
            Self::DatabaseConstraint => 2005,
            Self::DatabasePoolTimeout => 2013,
            Self::DatabaseUnhandled => 2099,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidId => "Invalid resource identifier",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::BadRequest => "Bad request",
            Self::Conflict => "Request conflicts with the current state of the resource",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::InternalError => "An internal server error occurred",
            Self::ServiceUnavailable => "Service is temporarily unavailable",
            Self::DatabaseError => "Database error occurred",
            Self::DatabaseConnection => "Database is unreachable",
            Self::DatabaseConstraint => "Request violates a database constraint",
            Self::DatabasePoolTimeout => "Database connection pool timed out",
            Self::DatabaseUnhandled => "Unhandled database error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
