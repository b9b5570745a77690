use axum::Router;
use domain_employees::{EmployeeService, PgEmployeeRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgEmployeeRepository::new(state.db.clone());
    let service = EmployeeService::new(repository);
    handlers::router(service)
}
