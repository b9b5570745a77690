use resource::Resource;
use resource::validation::not_blank;
use sea_orm::{FromQueryResult, Value};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// OpenAPI tag for department endpoints
pub const TAG: &str = "departments";

/// Where created departments are addressed
pub const BASE_PATH: &str = "/api/departments";

/// A department as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Engineering")]
    pub name: String,
    #[schema(example = "Builds things")]
    pub description: Option<String>,
}

/// Create/update body for a department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPayload {
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    #[schema(example = "Engineering", min_length = 1, max_length = 255)]
    pub name: String,

    #[validate(length(max = 1024))]
    #[serde(default)]
    #[schema(example = "Builds things", max_length = 1024)]
    pub description: Option<String>,
}

impl Resource for Department {
    const KIND: &'static str = "Department";
    const TABLE: &'static str = "Departments";
    const COLUMNS: &'static [&'static str] = &["name", "description"];

    type Payload = DepartmentPayload;

    fn id(&self) -> i64 {
        self.id
    }

    fn bind(payload: &DepartmentPayload) -> Vec<Value> {
        vec![
            payload.name.clone().into(),
            payload.description.clone().into(),
        ]
    }

    fn assemble(id: i64, payload: DepartmentPayload) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
        }
    }
}
