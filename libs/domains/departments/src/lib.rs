//! Departments Domain
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /api/departments
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← resource::ResourceService<Department, _>
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← PgDepartmentRepository / InMemoryRepository
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_departments::{DepartmentService, handlers};
//! use resource::InMemoryRepository;
//!
//! let service = DepartmentService::new(InMemoryRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod handlers;
pub mod models;

pub use models::{Department, DepartmentPayload};

/// PostgreSQL-backed department repository
pub type PgDepartmentRepository = resource::PgResourceRepository<Department>;

pub type DepartmentService<Repo> = resource::ResourceService<Department, Repo>;
