//! Storage records
//!
//! One record struct per table, mirroring the persisted row shape
//! (identity, attributes, timestamps, soft-delete marker). Domain
//! entities never appear in SQL; the repositories translate through the
//! per-entity mapping functions defined alongside each record.

mod department;
mod permission;
mod position;
mod role;
mod user;

pub use department::DepartmentRecord;
pub use permission::PermissionRecord;
pub use position::PositionRecord;
pub use role::RoleRecord;
pub use user::UserRecord;

pub use department::{department_to_entity, department_to_record};
pub use permission::{permission_to_entity, permission_to_record};
pub use position::{position_to_entity, position_to_record};
pub use role::{role_to_entity, role_to_record};
pub use user::{user_to_entity, user_to_record};

use shared::query::FilterValue;
use sqlx::sqlite::SqliteRow;

/// A value bound into dynamically-built SQL
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
    Real(f64),
    Bool(bool),
    Null,
}

impl From<&FilterValue> for SqlValue {
    fn from(value: &FilterValue) -> Self {
        match value {
            FilterValue::Text(s) => Self::Text(s.clone()),
            FilterValue::Integer(i) => Self::Integer(*i),
            FilterValue::Float(f) => Self::Real(*f),
            FilterValue::Bool(b) => Self::Bool(*b),
            FilterValue::Null => Self::Null,
        }
    }
}

/// Row shape of a persisted table
///
/// `COLUMNS` lists the writable columns, excluding the identity and the
/// server-maintained timestamp/soft-delete columns; `values` returns the
/// bind values in the same order.
pub trait StorageRecord: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn values(&self) -> Vec<SqlValue>;
}

/// Placeholder timestamp for records built from entities; the real values
/// are server-maintained and only meaningful on rows read back
pub(crate) fn epoch() -> chrono::NaiveDateTime {
    chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.naive_utc()
}
