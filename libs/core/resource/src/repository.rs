use async_trait::async_trait;

use crate::error::ResourceResult;
use crate::model::Resource;

/// Data access for one resource type.
///
/// Absence is a value, never an error: `find_by_id` returns `None`, `update`
/// and `delete` return `false` when no row matched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceRepository<R: Resource>: Send + Sync {
    /// All rows, ordered by identifier ascending
    async fn find_all(&self) -> ResourceResult<Vec<R>>;

    async fn find_by_id(&self, id: i64) -> ResourceResult<Option<R>>;

    /// Insert a row and return it with the identifier the store assigned
    async fn create(&self, payload: R::Payload) -> ResourceResult<R>;

    /// Overwrite every mutable column of row `id`; `true` when a row matched
    async fn update(&self, id: i64, payload: &R::Payload) -> ResourceResult<bool>;

    /// Remove row `id`; `true` when a row matched
    async fn delete(&self, id: i64) -> ResourceResult<bool>;
}
