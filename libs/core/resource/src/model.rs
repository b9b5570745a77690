use sea_orm::{FromQueryResult, Value};
use std::fmt::Debug;
use validator::Validate;

/// An entity stored as one row of one table, keyed by a store-assigned
/// `BIGINT` identifier in column `id`.
///
/// Rows are read with the `FromQueryResult` impl, so the entity's field names
/// must match `id` plus [`COLUMNS`](Resource::COLUMNS).
pub trait Resource: FromQueryResult + Debug + Clone + Send + Sync + 'static {
    /// Name used in error messages, e.g. `"Department"`.
    const KIND: &'static str;

    /// Table holding the rows.
    const TABLE: &'static str;

    /// Mutable columns, in the order [`bind`](Resource::bind) returns values.
    const COLUMNS: &'static [&'static str];

    /// Create/update body: every mutable field, no identifier.
    type Payload: Validate + Debug + Clone + Send + Sync + 'static;

    fn id(&self) -> i64;

    /// Statement values for [`COLUMNS`](Resource::COLUMNS).
    fn bind(payload: &Self::Payload) -> Vec<Value>;

    /// The entity as stored under `id` after writing `payload`.
    fn assemble(id: i64, payload: Self::Payload) -> Self;
}
