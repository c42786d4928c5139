//! Generic CRUD repository
//!
//! A single parameterized adapter between a domain entity `E` and its
//! storage record `R`. The two mapping functions are injected at
//! construction; per-entity repositories embed this type and override the
//! odd operation (eager joins, association handling).
//!
//! Filter keys are checked against the entity's static field table before
//! they are interpolated into SQL, so unknown columns never reach the
//! store. All rows are soft-deleted: every predicate carries
//! `deleted_at IS NULL` and `delete` only stamps the marker.

use shared::error::SystemError;
use shared::query::{FieldSchema, Filters, FilterValue, PaginatedResponse, SearchQuery};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::db::records::{SqlValue, StorageRecord};

/// Parameterized CRUD adapter over a (entity, record) pair
pub struct CrudRepository<E, R> {
    pool: SqlitePool,
    to_record: fn(&E) -> R,
    to_entity: fn(R) -> E,
}

impl<E, R> Clone for CrudRepository<E, R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            to_record: self.to_record,
            to_entity: self.to_entity,
        }
    }
}

impl<E, R> CrudRepository<E, R>
where
    E: FieldSchema,
    R: StorageRecord,
{
    pub fn new(pool: SqlitePool, to_record: fn(&E) -> R, to_entity: fn(R) -> E) -> Self {
        Self {
            pool,
            to_record,
            to_entity,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Count and fetch one page of rows matching the query
    pub async fn get_by_filter(
        &self,
        query: &SearchQuery,
    ) -> Result<PaginatedResponse<E>, SystemError> {
        let limit = query.pagination.limit();
        let offset = query.pagination.offset();

        let mut count = QueryBuilder::<Sqlite>::new(format!(
            "SELECT COUNT(*) FROM {} WHERE deleted_at IS NULL",
            R::TABLE
        ));
        Self::push_filters(&mut count, &query.filters)?;
        let total_rows: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::warn!(table = R::TABLE, error = %e, "Count query failed");
                SystemError::validation("Count failed")
            })?;

        let mut select = QueryBuilder::<Sqlite>::new(format!(
            "SELECT * FROM {} WHERE deleted_at IS NULL",
            R::TABLE
        ));
        Self::push_filters(&mut select, &query.filters)?;
        select.push(" LIMIT ");
        select.push_bind(limit);
        select.push(" OFFSET ");
        select.push_bind(offset);

        let records: Vec<R> = select
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::warn!(table = R::TABLE, error = %e, "Select query failed");
                SystemError::validation("Query failed")
            })?;

        let to_entity = self.to_entity;
        let rows = records.into_iter().map(to_entity).collect();
        Ok(PaginatedResponse::new(total_rows, limit, rows))
    }

    /// Single-row lookup by exact field equality
    ///
    /// Zero rows and driver failures are the same flat error; callers can
    /// only branch on the error being present.
    pub async fn get_once(&self, key: &str, value: &FilterValue) -> Result<E, SystemError> {
        Self::ensure_field(key)?;

        let mut select = QueryBuilder::<Sqlite>::new(format!(
            "SELECT * FROM {} WHERE deleted_at IS NULL AND ",
            R::TABLE
        ));
        select.push(key);
        select.push(" = ");
        push_value(&mut select, SqlValue::from(value));
        select.push(" LIMIT 1");

        let record: Option<R> = select
            .build_query_as()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::warn!(table = R::TABLE, error = %e, "GetOnce query failed");
                SystemError::validation("GetOnce failed")
            })?;

        match record {
            Some(record) => Ok((self.to_entity)(record)),
            None => Err(SystemError::validation("GetOnce failed")),
        }
    }

    /// Whether a row with `key = value` exists
    ///
    /// Absence is `Ok(false)`; only driver failures are errors.
    pub async fn exists(&self, key: &str, value: &FilterValue) -> Result<bool, SystemError> {
        Self::ensure_field(key)?;

        let mut count = QueryBuilder::<Sqlite>::new(format!(
            "SELECT COUNT(*) FROM {} WHERE deleted_at IS NULL AND ",
            R::TABLE
        ));
        count.push(key);
        count.push(" = ");
        push_value(&mut count, SqlValue::from(value));

        let rows: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::warn!(table = R::TABLE, error = %e, "Exists query failed");
                SystemError::validation("Exists failed")
            })?;

        Ok(rows > 0)
    }

    /// Insert a new row and read it back, capturing generated identity
    /// and column defaults
    pub async fn create(&self, item: &E) -> Result<E, SystemError> {
        let mut record = (self.to_record)(item);
        if record.id().is_empty() {
            record.set_id(Uuid::new_v4().to_string());
        }

        let mut insert =
            QueryBuilder::<Sqlite>::new(format!("INSERT INTO {} (id", R::TABLE));
        for column in R::COLUMNS {
            insert.push(", ");
            insert.push(*column);
        }
        insert.push(") VALUES (");
        insert.push_bind(record.id().to_string());
        for value in record.values() {
            insert.push(", ");
            push_value(&mut insert, value);
        }
        insert.push(")");

        insert.build().execute(&self.pool).await.map_err(|e| {
            tracing::warn!(table = R::TABLE, error = %e, "Insert failed");
            SystemError::validation("Query failed")
        })?;

        self.fetch_by_id(record.id()).await
    }

    /// Save the row stored under `id` and read it back
    pub async fn update(&self, id: &str, item: &E) -> Result<E, SystemError> {
        let record = (self.to_record)(item);

        let mut update = QueryBuilder::<Sqlite>::new(format!(
            "UPDATE {} SET updated_at = CURRENT_TIMESTAMP",
            R::TABLE
        ));
        for (column, value) in R::COLUMNS.iter().zip(record.values()) {
            update.push(", ");
            update.push(*column);
            update.push(" = ");
            push_value(&mut update, value);
        }
        update.push(" WHERE deleted_at IS NULL AND id = ");
        update.push_bind(id.to_string());

        let result = update.build().execute(&self.pool).await.map_err(|e| {
            tracing::warn!(table = R::TABLE, error = %e, "Update failed");
            SystemError::validation("Update failed")
        })?;
        if result.rows_affected() == 0 {
            return Err(SystemError::validation("Update failed"));
        }

        self.fetch_by_id(id).await
    }

    /// Soft-delete the row stored under `id`
    pub async fn delete(&self, id: &str) -> Result<(), SystemError> {
        let mut delete = QueryBuilder::<Sqlite>::new(format!(
            "UPDATE {} SET deleted_at = CURRENT_TIMESTAMP WHERE deleted_at IS NULL AND id = ",
            R::TABLE
        ));
        delete.push_bind(id.to_string());

        delete.build().execute(&self.pool).await.map_err(|e| {
            tracing::warn!(table = R::TABLE, error = %e, "Delete failed");
            SystemError::validation("Delete failed")
        })?;
        Ok(())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<E, SystemError> {
        self.get_once("id", &FilterValue::Text(id.to_string())).await
    }

    fn push_filters(
        builder: &mut QueryBuilder<'_, Sqlite>,
        filters: &Filters,
    ) -> Result<(), SystemError> {
        for filter in filters.iter() {
            Self::ensure_field(&filter.key)?;
            builder.push(" AND ");
            builder.push(&filter.key);
            builder.push(" = ");
            push_value(builder, SqlValue::from(&filter.value));
        }
        Ok(())
    }

    /// Reject keys that do not name a declared entity field; this is what
    /// keeps dynamically-built predicates injection-free
    fn ensure_field(key: &str) -> Result<(), SystemError> {
        if key.is_empty() {
            return Err(SystemError::validation("key is empty"));
        }
        if E::field_kind(key).is_none() {
            return Err(SystemError::validation(format!("field not found: {key}")));
        }
        Ok(())
    }
}

fn push_value(builder: &mut QueryBuilder<'_, Sqlite>, value: SqlValue) {
    match value {
        SqlValue::Text(s) => {
            builder.push_bind(s);
        }
        SqlValue::Integer(i) => {
            builder.push_bind(i);
        }
        SqlValue::Real(f) => {
            builder.push_bind(f);
        }
        SqlValue::Bool(b) => {
            builder.push_bind(b);
        }
        SqlValue::Null => {
            builder.push_bind(Option::<String>::None);
        }
    }
}
