use axum::{
    body::Body,
    extract::{OriginalUri, Request},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::errors::ErrorResponse;

/// Fills in `path` on error bodies.
///
/// Error responses carry their [`ErrorResponse`] in the response extensions;
/// this middleware takes it out, stamps the request path (before any `nest`
/// stripped a prefix) and re-serializes the body. Other responses pass
/// through untouched.
pub async fn error_request_path(request: Request, next: Next) -> Response {
    let path = request
        .extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.path().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let mut response = next.run(request).await;

    let Some(body) = response.extensions_mut().remove::<ErrorResponse>() else {
        return response;
    };

    let body = body.with_path(path);
    match serde_json::to_vec(&body) {
        Ok(bytes) => {
            let (mut parts, _) = response.into_parts();
            parts.headers.remove(header::CONTENT_LENGTH);
            parts.extensions.insert(body);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::error!("Failed to serialize error response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
