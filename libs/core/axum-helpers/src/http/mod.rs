//! HTTP middleware module.
//!
//! - CORS configuration
//! - Security headers
//! - Request path stamping for error bodies
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{error_request_path, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(error_request_path))
//!     .layer(axum::middleware::from_fn(security_headers));
//! ```

pub mod cors;
pub mod request_path;
pub mod security;

pub use cors::{create_cors_layer, create_permissive_cors_layer};
pub use request_path::error_request_path;
pub use security::security_headers;
