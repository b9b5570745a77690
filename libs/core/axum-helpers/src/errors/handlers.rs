use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

/// Router fallback for unknown paths.
pub async fn not_found() -> Response {
    ErrorResponse::new(
        StatusCode::NOT_FOUND,
        ErrorCode::NotFound,
        "The requested resource was not found",
    )
    .into_response()
}

/// Fallback for known paths called with an unsupported method.
pub async fn method_not_allowed() -> Response {
    ErrorResponse::new(
        StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::MethodNotAllowed,
        ErrorCode::MethodNotAllowed.default_message(),
    )
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fallbacks_render_error_bodies() {
        let response = not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.extensions().get::<ErrorResponse>().is_some());

        let response = method_not_allowed().await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = response.extensions().get::<ErrorResponse>().unwrap();
        assert_eq!(body.error, "METHOD_NOT_ALLOWED");
    }
}
