//! Reusable OpenAPI response types for error bodies.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "timestamp": "2026-01-05T10:15:30.120Z",
        "status": 500,
        "error": "DATABASE_ERROR",
        "code": 2003,
        "message": "Database error occurred",
        "path": "/api/departments"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "timestamp": "2026-01-05T10:15:30.120Z",
        "status": 400,
        "error": "VALIDATION_ERROR",
        "code": 1001,
        "message": "Request validation failed",
        "path": "/api/departments",
        "details": {
            "name": [{
                "code": "blank",
                "message": "must not be blank",
                "params": {"value": "  "}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid identifier",
    content_type = "application/json",
    example = json!({
        "timestamp": "2026-01-05T10:15:30.120Z",
        "status": 400,
        "error": "INVALID_ID",
        "code": 1002,
        "message": "Invalid resource identifier: abc",
        "path": "/api/departments/abc"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "timestamp": "2026-01-05T10:15:30.120Z",
        "status": 404,
        "error": "NOT_FOUND",
        "code": 1004,
        "message": "Department not found: id=42",
        "path": "/api/departments/42"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable",
    content_type = "application/json",
    example = json!({
        "timestamp": "2026-01-05T10:15:30.120Z",
        "status": 503,
        "error": "DATABASE_POOL_TIMEOUT",
        "code": 2013,
        "message": "Database connection pool timed out",
        "path": "/api/employees"
    })
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);
