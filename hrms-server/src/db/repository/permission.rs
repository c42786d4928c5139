//! Permission Repository

use shared::error::SystemError;
use shared::models::Permission;
use sqlx::SqlitePool;

use crate::contracts::PermissionContract;
use crate::db::records::{self, PermissionRecord};

#[derive(Clone)]
pub struct PermissionRepository {
    pool: SqlitePool,
}

impl PermissionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PermissionContract for PermissionRepository {
    async fn get_all(&self) -> Result<Vec<Permission>, SystemError> {
        let rows: Vec<PermissionRecord> =
            sqlx::query_as("SELECT id, name, description, role_id FROM permissions ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    tracing::warn!(error = %e, "Permission catalog query failed");
                    SystemError::validation("Failed to get permissions")
                })?;
        Ok(rows.into_iter().map(records::permission_to_entity).collect())
    }
}
