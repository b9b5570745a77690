use resource::Resource;
use resource::validation::not_blank;
use sea_orm::{FromQueryResult, Value};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// OpenAPI tag for employee endpoints
pub const TAG: &str = "employees";

/// Where created employees are addressed
pub const BASE_PATH: &str = "/api/employees";

/// An employee as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Department reference; may be absent or point at a deleted department
    #[schema(example = 1)]
    pub department_id: Option<i64>,
}

/// Create/update body for an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    #[schema(example = "Ada", min_length = 1, max_length = 255)]
    pub first_name: String,

    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    #[schema(example = "Lovelace", min_length = 1, max_length = 255)]
    pub last_name: String,

    #[validate(email, length(min = 1, max = 320), custom(function = "not_blank"))]
    #[schema(example = "ada@example.com", max_length = 320)]
    pub email: String,

    #[serde(default)]
    #[schema(example = 1)]
    pub department_id: Option<i64>,
}

impl Resource for Employee {
    const KIND: &'static str = "Employee";
    const TABLE: &'static str = "Employees";
    const COLUMNS: &'static [&'static str] = &["first_name", "last_name", "email", "department_id"];

    type Payload = EmployeePayload;

    fn id(&self) -> i64 {
        self.id
    }

    fn bind(payload: &EmployeePayload) -> Vec<Value> {
        vec![
            payload.first_name.clone().into(),
            payload.last_name.clone().into(),
            payload.email.clone().into(),
            payload.department_id.into(),
        ]
    }

    fn assemble(id: i64, payload: EmployeePayload) -> Self {
        Self {
            id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            department_id: payload.department_id,
        }
    }
}
