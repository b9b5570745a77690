//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has passed `Validate`.
///
/// Malformed JSON rejects with `JSON_EXTRACTION`, constraint violations with
/// `VALIDATION_ERROR` and per-field details. Either way the handler never runs.
///
/// # Example
/// ```ignore
/// async fn create(ValidatedJson(payload): ValidatedJson<DepartmentPayload>) -> StatusCode {
///     // payload.validate() has already succeeded here
///     StatusCode::CREATED
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
