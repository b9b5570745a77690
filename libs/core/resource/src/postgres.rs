use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbBackend, DbErr, FromQueryResult, Statement, Value,
};
use std::marker::PhantomData;

use crate::error::ResourceResult;
use crate::model::Resource;
use crate::repository::ResourceRepository;

/// Statements for one resource, rendered once from `TABLE` and `COLUMNS`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResourceSql {
    select_all: String,
    select_one: String,
    insert: String,
    update: String,
    delete: String,
}

impl ResourceSql {
    fn for_resource<R: Resource>() -> Self {
        let table = R::TABLE;
        let columns = R::COLUMNS;
        let projection = std::iter::once("id")
            .chain(columns.iter().copied())
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=columns.len())
            .map(|n| format!("${n}"))
            .collect::<Vec<_>>()
            .join(", ");
        let assignments = columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ${}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let id_param = columns.len() + 1;

        Self {
            select_all: format!("SELECT {projection} FROM {table} ORDER BY id"),
            select_one: format!("SELECT {projection} FROM {table} WHERE id = $1"),
            // Key is read from the INSERT itself, never from the session.
            insert: format!(
                "INSERT INTO {table} ({}, created_at, updated_at) \
                 VALUES ({placeholders}, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP) RETURNING id",
                columns.join(", ")
            ),
            update: format!(
                "UPDATE {table} SET {assignments}, updated_at = CURRENT_TIMESTAMP WHERE id = ${id_param}"
            ),
            delete: format!("DELETE FROM {table} WHERE id = $1"),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct InsertedId {
    id: i64,
}

/// PostgreSQL implementation of ResourceRepository using SeaORM raw statements
pub struct PgResourceRepository<R> {
    db: DatabaseConnection,
    sql: ResourceSql,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> PgResourceRepository<R> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            sql: ResourceSql::for_resource::<R>(),
            _resource: PhantomData,
        }
    }

    fn statement(sql: &str, values: impl IntoIterator<Item = Value>) -> Statement {
        Statement::from_sql_and_values(DbBackend::Postgres, sql, values)
    }
}

impl<R> Clone for PgResourceRepository<R> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            sql: self.sql.clone(),
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceRepository<R> for PgResourceRepository<R> {
    async fn find_all(&self) -> ResourceResult<Vec<R>> {
        let stmt = Self::statement(&self.sql.select_all, []);
        let rows = R::find_by_statement(stmt).all(&self.db).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> ResourceResult<Option<R>> {
        let stmt = Self::statement(&self.sql.select_one, [id.into()]);
        let row = R::find_by_statement(stmt).one(&self.db).await?;
        Ok(row)
    }

    async fn create(&self, payload: R::Payload) -> ResourceResult<R> {
        let stmt = Self::statement(&self.sql.insert, R::bind(&payload));
        let inserted = InsertedId::find_by_statement(stmt)
            .one(&self.db)
            .await?
            .ok_or(DbErr::RecordNotInserted)?;

        tracing::debug!(table = R::TABLE, id = inserted.id, "Inserted row");
        Ok(R::assemble(inserted.id, payload))
    }

    async fn update(&self, id: i64, payload: &R::Payload) -> ResourceResult<bool> {
        let mut values = R::bind(payload);
        values.push(id.into());
        let stmt = Self::statement(&self.sql.update, values);

        let result = self.db.execute_raw(stmt).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> ResourceResult<bool> {
        let stmt = Self::statement(&self.sql.delete, [id.into()]);
        let result = self.db.execute_raw(stmt).await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResourceError;
    use crate::model::fixtures::{Widget, WidgetPayload, payload};
    use sea_orm::{MockDatabase, MockExecResult, Transaction};
    use std::collections::BTreeMap;

    fn widget_row(id: i64, label: &str, note: Option<&str>) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            ("id", id.into()),
            ("label", label.into()),
            ("note", note.map(str::to_string).into()),
        ])
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[test]
    fn sql_is_rendered_from_table_and_columns() {
        let sql = ResourceSql::for_resource::<Widget>();

        assert_eq!(sql.select_all, "SELECT id, label, note FROM Widgets ORDER BY id");
        assert_eq!(sql.select_one, "SELECT id, label, note FROM Widgets WHERE id = $1");
        assert_eq!(
            sql.insert,
            "INSERT INTO Widgets (label, note, created_at, updated_at) \
             VALUES ($1, $2, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP) RETURNING id"
        );
        assert_eq!(
            sql.update,
            "UPDATE Widgets SET label = $1, note = $2, updated_at = CURRENT_TIMESTAMP WHERE id = $3"
        );
        assert_eq!(sql.delete, "DELETE FROM Widgets WHERE id = $1");
    }

    #[tokio::test]
    async fn create_returns_identifier_from_insert_statement() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([("id", Value::from(7i64))])]])
            .into_connection();
        let repo = PgResourceRepository::<Widget>::new(db.clone());

        let input = WidgetPayload {
            label: "gear".into(),
            note: Some("steel".into()),
        };
        let created = repo.create(input.clone()).await.unwrap();

        assert_eq!(created, Widget::assemble(7, input));
        let sql = ResourceSql::for_resource::<Widget>();
        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DbBackend::Postgres,
                sql.insert,
                [Value::from("gear"), Some("steel".to_string()).into()],
            )]
        );
    }

    #[tokio::test]
    async fn create_without_returned_row_is_a_database_error() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();
        let repo = PgResourceRepository::<Widget>::new(db);

        let result = repo.create(payload("gear")).await;

        assert!(matches!(
            result,
            Err(ResourceError::Database(DbErr::RecordNotInserted))
        ));
    }

    #[tokio::test]
    async fn find_all_maps_rows_in_order() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([vec![
                widget_row(1, "a", None),
                widget_row(2, "b", Some("second")),
            ]])
            .into_connection();
        let repo = PgResourceRepository::<Widget>::new(db);

        let all = repo.find_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[0].note, None);
        assert_eq!(all[1].note.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn find_by_id_is_none_for_missing_row() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
            .into_connection();
        let repo = PgResourceRepository::<Widget>::new(db.clone());

        assert!(repo.find_by_id(5).await.unwrap().is_none());
        assert_eq!(
            db.into_transaction_log(),
            [Transaction::from_sql_and_values(
                DbBackend::Postgres,
                "SELECT id, label, note FROM Widgets WHERE id = $1",
                [5i64.into()],
            )]
        );
    }

    #[tokio::test]
    async fn update_binds_id_last_and_reports_affected_rows() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_exec_results([exec(1), exec(0)])
            .into_connection();
        let repo = PgResourceRepository::<Widget>::new(db.clone());

        assert!(repo.update(3, &payload("new")).await.unwrap());
        assert!(!repo.update(4, &payload("new")).await.unwrap());

        let log = db.into_transaction_log();
        assert_eq!(
            log[0],
            Transaction::from_sql_and_values(
                DbBackend::Postgres,
                "UPDATE Widgets SET label = $1, note = $2, updated_at = CURRENT_TIMESTAMP WHERE id = $3",
                [Value::from("new"), Option::<String>::None.into(), 3i64.into()],
            )
        );
    }

    #[tokio::test]
    async fn delete_reports_affected_rows() {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_exec_results([exec(1), exec(0)])
            .into_connection();
        let repo = PgResourceRepository::<Widget>::new(db);

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn store_failures_pass_through_as_database_errors() {
        // No results queued: the mock connection fails the query.
        let db = MockDatabase::new(DbBackend::Postgres).into_connection();
        let repo = PgResourceRepository::<Widget>::new(db);

        assert!(matches!(
            repo.find_all().await,
            Err(ResourceError::Database(_))
        ));
    }
}
