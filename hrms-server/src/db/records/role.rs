//! Role storage record
//!
//! The owned permission rows live in their own table; the generic mapping
//! leaves `Role::permissions` empty and the role repository fills it in
//! on its eager-loading paths.

use chrono::NaiveDateTime;
use shared::models::Role;

use super::{SqlValue, StorageRecord, epoch};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RoleRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl StorageRecord for RoleRecord {
    const TABLE: &'static str = "roles";
    const COLUMNS: &'static [&'static str] = &["name", "description"];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.name.clone()),
            SqlValue::Text(self.description.clone()),
        ]
    }
}

pub fn role_to_record(role: &Role) -> RoleRecord {
    RoleRecord {
        id: role.id.clone(),
        name: role.name.clone(),
        description: role.description.clone(),
        created_at: epoch(),
        updated_at: epoch(),
        deleted_at: None,
    }
}

pub fn role_to_entity(record: RoleRecord) -> Role {
    Role {
        id: record.id,
        name: record.name,
        description: record.description,
        permissions: Vec::new(),
    }
}
