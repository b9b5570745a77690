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

use crate::DepartmentService;
use crate::models::{BASE_PATH, Department, DepartmentPayload, TAG};

/// OpenAPI documentation for Departments API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_departments,
        create_department,
        get_department,
        update_department,
        delete_department,
    ),
    components(
        schemas(Department, DepartmentPayload),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = TAG, description = "Department management endpoints")
    )
)]
pub struct ApiDoc;

type DepartmentApi<Repo> = ResourceApi<Department, Repo>;

/// Create the department router with all HTTP endpoints
pub fn router<Repo: ResourceRepository<Department> + 'static>(
    service: DepartmentService<Repo>,
) -> Router {
    let api = ResourceApi::new(service, BASE_PATH);

    Router::new()
        .route("/", get(list_departments).post(create_department))
        .route(
            "/{id}",
            get(get_department)
                .put(update_department)
                .delete(delete_department),
        )
        .with_state(api)
}

/// List all departments, ordered by identifier
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "All departments", body = Vec<Department>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_departments<Repo: ResourceRepository<Department>>(
    State(api): State<DepartmentApi<Repo>>,
) -> ResourceResult<Json<Vec<Department>>> {
    api.list().await
}

/// Create a department
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = DepartmentPayload,
    responses(
        (status = 201, description = "Department created", body = Department,
            headers(("Location" = String, description = "Address of the new department"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_department<Repo: ResourceRepository<Department>>(
    State(api): State<DepartmentApi<Repo>>,
    ValidatedJson(input): ValidatedJson<DepartmentPayload>,
) -> ResourceResult<Response> {
    api.create(input).await
}

/// Get a department by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department found", body = Department),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_department<Repo: ResourceRepository<Department>>(
    State(api): State<DepartmentApi<Repo>>,
    IdPath(id): IdPath,
) -> ResourceResult<Json<Department>> {
    api.get(id).await
}

/// Replace a department's fields
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Department ID")
    ),
    request_body = DepartmentPayload,
    responses(
        (status = 200, description = "Department updated", body = Department),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_department<Repo: ResourceRepository<Department>>(
    State(api): State<DepartmentApi<Repo>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<DepartmentPayload>,
) -> ResourceResult<Json<Department>> {
    api.update(id, input).await
}

/// Delete a department
///
/// Employees referencing it keep their `departmentId`.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Department ID")
    ),
    responses(
        (status = 204, description = "Department deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_department<Repo: ResourceRepository<Department>>(
    State(api): State<DepartmentApi<Repo>>,
    IdPath(id): IdPath,
) -> ResourceResult<StatusCode> {
    api.delete(id).await
}
