use std::marker::PhantomData;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ResourceError, ResourceResult};
use crate::model::Resource;
use crate::repository::ResourceRepository;

/// Service layer for one resource: validates payloads and turns repository
/// absence signals into [`ResourceError::NotFound`].
pub struct ResourceService<R, Repo> {
    repository: Arc<Repo>,
    _resource: PhantomData<fn() -> R>,
}

impl<R, Repo> Clone for ResourceService<R, Repo> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            _resource: PhantomData,
        }
    }
}

impl<R, Repo> ResourceService<R, Repo>
where
    R: Resource,
    Repo: ResourceRepository<R>,
{
    pub fn new(repository: Repo) -> Self {
        Self {
            repository: Arc::new(repository),
            _resource: PhantomData,
        }
    }

    #[instrument(skip(self), fields(kind = R::KIND))]
    pub async fn find_all(&self) -> ResourceResult<Vec<R>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self), fields(kind = R::KIND))]
    pub async fn find_by_id_or_throw(&self, id: i64) -> ResourceResult<R> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ResourceError::not_found(R::KIND, id))
    }

    #[instrument(skip(self, payload), fields(kind = R::KIND))]
    pub async fn create(&self, payload: R::Payload) -> ResourceResult<R> {
        payload.validate()?;

        let created = self.repository.create(payload).await?;
        tracing::info!(id = created.id(), "Created {}", R::KIND);
        Ok(created)
    }

    /// The returned entity is rebuilt from `id` and `payload`; the row is
    /// not read back.
    #[instrument(skip(self, payload), fields(kind = R::KIND))]
    pub async fn update(&self, id: i64, payload: R::Payload) -> ResourceResult<R> {
        payload.validate()?;

        if !self.repository.update(id, &payload).await? {
            return Err(ResourceError::not_found(R::KIND, id));
        }

        tracing::info!(id, "Updated {}", R::KIND);
        Ok(R::assemble(id, payload))
    }

    #[instrument(skip(self), fields(kind = R::KIND))]
    pub async fn delete(&self, id: i64) -> ResourceResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ResourceError::not_found(R::KIND, id));
        }

        tracing::info!(id, "Deleted {}", R::KIND);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{Widget, WidgetPayload, payload};
    use crate::repository::MockResourceRepository;
    use mockall::predicate::eq;
    use sea_orm::DbErr;

    fn widget(id: i64, label: &str) -> Widget {
        Widget::assemble(id, payload(label))
    }

    #[tokio::test]
    async fn find_by_id_or_throw_returns_entity() {
        let mut repo = MockResourceRepository::<Widget>::new();
        repo.expect_find_by_id()
            .with(eq(4))
            .returning(|id| Ok(Some(widget(id, "gear"))));

        let service = ResourceService::new(repo);
        let found = service.find_by_id_or_throw(4).await.unwrap();

        assert_eq!(found, widget(4, "gear"));
    }

    #[tokio::test]
    async fn find_by_id_or_throw_elevates_absence_to_not_found() {
        let mut repo = MockResourceRepository::<Widget>::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = ResourceService::new(repo);
        let err = service.find_by_id_or_throw(99).await.unwrap_err();

        assert!(matches!(
            err,
            ResourceError::NotFound {
                kind: "Widget",
                id: 99
            }
        ));
    }

    #[tokio::test]
    async fn create_returns_store_populated_entity() {
        let mut repo = MockResourceRepository::<Widget>::new();
        repo.expect_create()
            .times(1)
            .returning(|p| Ok(Widget::assemble(1, p)));

        let service = ResourceService::new(repo);
        let created = service.create(payload("gear")).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.label, "gear");
    }

    #[tokio::test]
    async fn invalid_payload_never_reaches_repository() {
        let mut repo = MockResourceRepository::<Widget>::new();
        repo.expect_create().never();
        repo.expect_update().never();

        let service = ResourceService::new(repo);

        let err = service.create(payload("")).await.unwrap_err();
        assert!(matches!(err, ResourceError::Validation(_)));

        let err = service.update(1, payload("")).await.unwrap_err();
        assert!(matches!(err, ResourceError::Validation(_)));
    }

    #[tokio::test]
    async fn update_rebuilds_entity_from_input() {
        let mut repo = MockResourceRepository::<Widget>::new();
        repo.expect_update()
            .withf(|id, p| *id == 5 && p.label == "renamed")
            .times(1)
            .returning(|_, _| Ok(true));
        repo.expect_find_by_id().never();

        let service = ResourceService::new(repo);
        let input = WidgetPayload {
            label: "renamed".into(),
            note: Some("kept".into()),
        };
        let updated = service.update(5, input.clone()).await.unwrap();

        assert_eq!(updated, Widget::assemble(5, input));
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let mut repo = MockResourceRepository::<Widget>::new();
        repo.expect_update().returning(|_, _| Ok(false));

        let service = ResourceService::new(repo);
        let err = service.update(8, payload("x")).await.unwrap_err();

        assert_eq!(err.to_string(), "Widget not found: id=8");
    }

    #[tokio::test]
    async fn delete_of_missing_row_is_not_found() {
        let mut repo = MockResourceRepository::<Widget>::new();
        repo.expect_delete().with(eq(3)).returning(|_| Ok(false));

        let service = ResourceService::new(repo);
        let err = service.delete(3).await.unwrap_err();

        assert!(matches!(err, ResourceError::NotFound { id: 3, .. }));
    }

    #[tokio::test]
    async fn delete_of_existing_row_completes() {
        let mut repo = MockResourceRepository::<Widget>::new();
        repo.expect_delete().with(eq(3)).returning(|_| Ok(true));

        let service = ResourceService::new(repo);
        assert!(service.delete(3).await.is_ok());
    }

    #[tokio::test]
    async fn store_failure_propagates_unchanged() {
        let mut repo = MockResourceRepository::<Widget>::new();
        repo.expect_find_all()
            .returning(|| Err(DbErr::Custom("connection reset".into()).into()));

        let service = ResourceService::new(repo);
        let err = service.find_all().await.unwrap_err();

        assert!(matches!(err, ResourceError::Database(DbErr::Custom(_))));
    }
}
