use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::Response,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, ServiceUnavailableResponse,
    },
};
use resource::{ResourceApi, ResourceRepository, ResourceResult};
use utoipa::OpenApi;

use crate::EmployeeService;
use crate::models::{BASE_PATH, Employee, EmployeePayload, TAG};

/// OpenAPI documentation for Employees API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_employees,
        create_employee,
        get_employee,
        update_employee,
        delete_employee,
    ),
    components(
        schemas(Employee, EmployeePayload),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = TAG, description = "Employee management endpoints")
    )
)]
pub struct ApiDoc;

type EmployeeApi<Repo> = ResourceApi<Employee, Repo>;

/// Create the employee router with all HTTP endpoints
pub fn router<Repo: ResourceRepository<Employee> + 'static>(
    service: EmployeeService<Repo>,
) -> Router {
    let api = ResourceApi::new(service, BASE_PATH);

    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/{id}",
            get(get_employee)
                .put(update_employee)
                .delete(delete_employee),
        )
        .with_state(api)
}

/// List all employees, ordered by identifier
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All employees", body = Vec<Employee>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_employees<Repo: ResourceRepository<Employee>>(
    State(api): State<EmployeeApi<Repo>>,
) -> ResourceResult<Json<Vec<Employee>>> {
    api.list().await
}

/// Create an employee
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = EmployeePayload,
    responses(
        (status = 201, description = "Employee created", body = Employee,
            headers(("Location" = String, description = "Address of the new employee"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_employee<Repo: ResourceRepository<Employee>>(
    State(api): State<EmployeeApi<Repo>>,
    ValidatedJson(input): ValidatedJson<EmployeePayload>,
) -> ResourceResult<Response> {
    api.create(input).await
}

/// Get an employee by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_employee<Repo: ResourceRepository<Employee>>(
    State(api): State<EmployeeApi<Repo>>,
    IdPath(id): IdPath,
) -> ResourceResult<Json<Employee>> {
    api.get(id).await
}

/// Replace an employee's fields
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    request_body = EmployeePayload,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_employee<Repo: ResourceRepository<Employee>>(
    State(api): State<EmployeeApi<Repo>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<EmployeePayload>,
) -> ResourceResult<Json<Employee>> {
    api.update(id, input).await
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_employee<Repo: ResourceRepository<Employee>>(
    State(api): State<EmployeeApi<Repo>>,
    IdPath(id): IdPath,
) -> ResourceResult<StatusCode> {
    api.delete(id).await
}
