use axum::Router;
use domain_departments::{DepartmentService, PgDepartmentRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgDepartmentRepository::new(state.db.clone());
    let service = DepartmentService::new(repository);
    handlers::router(service)
}
