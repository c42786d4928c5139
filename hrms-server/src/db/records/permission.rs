//! Permission storage record

use shared::models::Permission;

use super::{SqlValue, StorageRecord};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PermissionRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub role_id: String,
}

impl StorageRecord for PermissionRecord {
    const TABLE: &'static str = "permissions";
    const COLUMNS: &'static [&'static str] = &["name", "description", "role_id"];

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
            SqlValue::Text(self.role_id.clone()),
        ]
    }
}

pub fn permission_to_record(permission: &Permission) -> PermissionRecord {
    PermissionRecord {
        id: permission.id.clone(),
        name: permission.name.clone(),
        description: permission.description.clone(),
        role_id: permission.role_id.clone(),
    }
}

pub fn permission_to_entity(record: PermissionRecord) -> Permission {
    Permission {
        id: record.id,
        name: record.name,
        description: record.description,
        role_id: record.role_id,
    }
}
