//! Employees Domain
//!
//! Same layering as departments: handlers mounted at `/api/employees`, a
//! `resource::ResourceService` in the middle and either the PostgreSQL or the
//! in-memory repository underneath.
//!
//! `departmentId` is stored as given. No check is made that the department
//! exists, and deleting a department leaves its employees untouched.

pub mod handlers;
pub mod models;

pub use models::{Employee, EmployeePayload};

/// PostgreSQL-backed employee repository
pub type PgEmployeeRepository = resource::PgResourceRepository<Employee>;

pub type EmployeeService<Repo> = resource::ResourceService<Employee, Repo>;
