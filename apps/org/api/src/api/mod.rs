use axum::Router;

pub mod departments;
pub mod employees;
pub mod health;

/// Mount point of the departments resource under `/api`
pub const DEPARTMENTS_PATH: &str = "/departments";
/// Mount point of the employees resource under `/api`
pub const EMPLOYEES_PATH: &str = "/employees";

/// Routes of the department service, without the `/api` prefix.
pub fn department_routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(DEPARTMENTS_PATH, departments::router(state))
}

/// Routes of the employee service, without the `/api` prefix.
pub fn employee_routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(EMPLOYEES_PATH, employees::router(state))
}

/// Both resources, for the assembled deployment.
pub fn routes(state: &crate::state::AppState) -> Router {
    department_routes(state).merge(employee_routes(state))
}

pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
