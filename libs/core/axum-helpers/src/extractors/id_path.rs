//! Numeric identifier path parameter.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// A store-assigned identifier taken from the single path parameter.
///
/// Anything that is not a non-negative 64-bit integer is rejected with
/// `INVALID_ID` before the handler runs.
///
/// # Example
/// ```ignore
/// async fn get_department(IdPath(id): IdPath) -> String {
///     format!("Department {}", id)
/// }
///
/// let app = Router::new().route("/departments/{id}", get(get_department));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        parse_id(&raw).map(IdPath).ok_or(AppError::InvalidId(raw))
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id >= 0)
}
