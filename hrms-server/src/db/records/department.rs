//! Department storage record

use chrono::NaiveDateTime;
use shared::models::Department;

use super::{SqlValue, StorageRecord, epoch};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DepartmentRecord {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl StorageRecord for DepartmentRecord {
    const TABLE: &'static str = "departments";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![SqlValue::Text(self.name.clone())]
    }
}

pub fn department_to_record(department: &Department) -> DepartmentRecord {
    DepartmentRecord {
        id: department.id.clone(),
        name: department.name.clone(),
        created_at: epoch(),
        updated_at: epoch(),
        deleted_at: None,
    }
}

pub fn department_to_entity(record: DepartmentRecord) -> Department {
    Department {
        id: record.id,
        name: record.name,
    }
}
