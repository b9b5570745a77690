//! Custom extractors for Axum handlers.
//!
//! Both reject through [`crate::errors::AppError`], so a bad body or a bad
//! identifier produce the same error body as any other failure.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
