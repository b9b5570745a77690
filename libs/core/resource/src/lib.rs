//! Generic persistence and orchestration for single-table REST resources.
//!
//! A resource is an entity type implementing [`Resource`]. The crate provides
//! the repository contract over it ([`ResourceRepository`]), a PostgreSQL
//! implementation issuing parameterized SQL ([`PgResourceRepository`]), an
//! in-memory implementation for tests ([`InMemoryRepository`]) and the
//! service that turns "no such row" into [`ResourceError::NotFound`]
//! ([`ResourceService`]). [`ResourceApi`] maps service results onto HTTP
//! responses.
//!
//! Repositories never report absence as an error: lookups return `Option`,
//! update and delete return whether a row was affected. Only the service
//! raises `NotFound`.

pub mod error;
pub mod http;
pub mod memory;
pub mod model;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::{ResourceError, ResourceResult};
pub use http::ResourceApi;
pub use memory::InMemoryRepository;
pub use model::Resource;
pub use postgres::PgResourceRepository;
pub use repository::ResourceRepository;
pub use service::ResourceService;
