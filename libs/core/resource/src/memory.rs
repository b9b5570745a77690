use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ResourceResult;
use crate::model::Resource;
use crate::repository::ResourceRepository;

/// In-memory implementation of ResourceRepository (for development/testing).
///
/// Identifiers are assigned sequentially from 1 and never reused.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<R> {
    state: Arc<RwLock<State<R>>>,
}

#[derive(Debug)]
struct State<R> {
    rows: BTreeMap<i64, R>,
    last_id: i64,
}

impl<R> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                rows: BTreeMap::new(),
                last_id: 0,
            })),
        }
    }

    /// Number of stored rows
    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<R> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource> ResourceRepository<R> for InMemoryRepository<R> {
    async fn find_all(&self) -> ResourceResult<Vec<R>> {
        let state = self.state.read().await;
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> ResourceResult<Option<R>> {
        let state = self.state.read().await;
        Ok(state.rows.get(&id).cloned())
    }

    async fn create(&self, payload: R::Payload) -> ResourceResult<R> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let entity = R::assemble(state.last_id, payload);
        state.rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: i64, payload: &R::Payload) -> ResourceResult<bool> {
        let mut state = self.state.write().await;
        match state.rows.get_mut(&id) {
            Some(row) => {
                *row = R::assemble(id, payload.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> ResourceResult<bool> {
        let mut state = self.state.write().await;
        Ok(state.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{Widget, payload};

    #[tokio::test]
    async fn ids_start_at_one_and_are_not_reused() {
        let repo = InMemoryRepository::<Widget>::new();

        let first = repo.create(payload("a")).await.unwrap();
        let second = repo.create(payload("b")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        assert!(repo.delete(2).await.unwrap());
        let third = repo.create(payload("c")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let repo = InMemoryRepository::<Widget>::new();
        for label in ["x", "y", "z"] {
            repo.create(payload(label)).await.unwrap();
        }

        let ids: Vec<i64> = repo.find_all().await.unwrap().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_rows() {
        let repo = InMemoryRepository::<Widget>::new();

        assert!(!repo.update(9, &payload("nope")).await.unwrap());
        assert!(!repo.delete(9).await.unwrap());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let repo = InMemoryRepository::<Widget>::new();
        let created = repo
            .create(crate::model::fixtures::WidgetPayload {
                label: "old".into(),
                note: Some("n".into()),
            })
            .await
            .unwrap();

        assert!(repo.update(created.id, &payload("new")).await.unwrap());

        let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.label, "new");
        assert_eq!(stored.note, None);
    }
}
