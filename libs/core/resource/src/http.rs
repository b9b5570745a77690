//! HTTP contract shared by every resource router.
//!
//! Domain handlers extract and document; [`ResourceApi`] decides status
//! codes, the `Location` header and the response bodies.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::ResourceResult;
use crate::model::Resource;
use crate::repository::ResourceRepository;
use crate::service::ResourceService;

/// A resource service mounted at `base_path` (e.g. `/api/departments`).
pub struct ResourceApi<R, Repo> {
    service: ResourceService<R, Repo>,
    base_path: &'static str,
}

impl<R, Repo> Clone for ResourceApi<R, Repo> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            base_path: self.base_path,
        }
    }
}

impl<R, Repo> ResourceApi<R, Repo>
where
    R: Resource + Serialize,
    Repo: ResourceRepository<R>,
{
    pub fn new(service: ResourceService<R, Repo>, base_path: &'static str) -> Self {
        Self { service, base_path }
    }

    /// Address of the resource stored under `id`
    pub fn location(&self, id: i64) -> String {
        format!("{}/{}", self.base_path, id)
    }

    /// 200 with every row, ordered by identifier
    pub async fn list(&self) -> ResourceResult<Json<Vec<R>>> {
        Ok(Json(self.service.find_all().await?))
    }

    /// 201 with the created entity and its `Location`
    pub async fn create(&self, payload: R::Payload) -> ResourceResult<Response> {
        let created = self.service.create(payload).await?;
        let location = self.location(created.id());

        Ok((
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(created),
        )
            .into_response())
    }

    pub async fn get(&self, id: i64) -> ResourceResult<Json<R>> {
        Ok(Json(self.service.find_by_id_or_throw(id).await?))
    }

    pub async fn update(&self, id: i64, payload: R::Payload) -> ResourceResult<Json<R>> {
        Ok(Json(self.service.update(id, payload).await?))
    }

    /// 204 on success
    pub async fn delete(&self, id: i64) -> ResourceResult<StatusCode> {
        self.service.delete(id).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
