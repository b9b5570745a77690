use utoipa::OpenApi;

/// API documentation for the department service
#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse)),
    info(
        title = "Department Service",
        version = "0.1.0",
        description = "Create, read, update and delete departments"
    ),
    servers((url = "/api", description = "API base path")),
    nest((path = crate::api::DEPARTMENTS_PATH, api = domain_departments::handlers::ApiDoc))
)]
pub struct DepartmentServiceDoc;

/// API documentation for the employee service
#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse)),
    info(
        title = "Employee Service",
        version = "0.1.0",
        description = "Create, read, update and delete employees"
    ),
    servers((url = "/api", description = "API base path")),
    nest((path = crate::api::EMPLOYEES_PATH, api = domain_employees::handlers::ApiDoc))
)]
pub struct EmployeeServiceDoc;

/// API documentation for the assembled organization API
#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse)),
    info(
        title = "Organization API",
        version = "0.1.0",
        description = "Departments and employees in one process"
    ),
    servers((url = "/api", description = "API base path")),
    nest(
        (path = crate::api::DEPARTMENTS_PATH, api = domain_departments::handlers::ApiDoc),
        (path = crate::api::EMPLOYEES_PATH, api = domain_employees::handlers::ApiDoc)
    )
)]
pub struct OrgApiDoc;
