//! Role Repository
//!
//! Specializes the generic adapter: the read paths eager-load the owned
//! permission rows and the write paths keep the role row and its
//! permission links in one transaction.

use shared::error::SystemError;
use shared::models::{Permission, Role};
use shared::query::{FilterValue, PaginatedResponse, SearchQuery};
use sqlx::{Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

use crate::contracts::{ReadOperation, RoleContract, WriteOperation};
use crate::db::records::{self, PermissionRecord, RoleRecord};
use crate::db::repository::CrudRepository;

#[derive(Clone)]
pub struct RoleRepository {
    crud: CrudRepository<Role, RoleRecord>,
    pool: SqlitePool,
}

impl RoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            crud: CrudRepository::new(pool.clone(), records::role_to_record, records::role_to_entity),
            pool,
        }
    }

    /// Permission rows owned by a role, in insertion order
    async fn load_permissions(&self, role_id: &str) -> Result<Vec<Permission>, SystemError> {
        let rows: Vec<PermissionRecord> = sqlx::query_as(
            "SELECT id, name, description, role_id FROM permissions WHERE role_id = ?",
        )
        .bind(role_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::warn!(role_id, error = %e, "Permission query failed");
            SystemError::validation("Query failed")
        })?;
        Ok(rows.into_iter().map(records::permission_to_entity).collect())
    }

    async fn insert_permissions(
        tx: &mut Transaction<'_, Sqlite>,
        role_id: &str,
        permissions: &[Permission],
    ) -> Result<(), sqlx::Error> {
        for permission in permissions {
            let id = if permission.id.is_empty() {
                Uuid::new_v4().to_string()
            } else {
                permission.id.clone()
            };
            sqlx::query(
                "INSERT INTO permissions (id, name, description, role_id) VALUES (?, ?, ?, ?)",
            )
            .bind(id)
            .bind(&permission.name)
            .bind(&permission.description)
            .bind(role_id)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}

impl ReadOperation<Role> for RoleRepository {
    /// Page of roles with their permission collections attached
    async fn get_by_filter(
        &self,
        query: &SearchQuery,
    ) -> Result<PaginatedResponse<Role>, SystemError> {
        let mut page = self.crud.get_by_filter(query).await?;
        for role in &mut page.rows {
            role.permissions = self.load_permissions(&role.id).await?;
        }
        Ok(page)
    }

    async fn get_once(&self, key: &str, value: &FilterValue) -> Result<Role, SystemError> {
        let mut role = self.crud.get_once(key, value).await?;
        role.permissions = self.load_permissions(&role.id).await?;
        Ok(role)
    }

    async fn exists(&self, key: &str, value: &FilterValue) -> Result<bool, SystemError> {
        self.crud.exists(key, value).await
    }
}

impl WriteOperation<Role> for RoleRepository {
    /// Insert the role row and its permission links together
    async fn create(&self, item: &Role) -> Result<Role, SystemError> {
        let id = if item.id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            item.id.clone()
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| SystemError::validation("Query failed"))?;

        sqlx::query("INSERT INTO roles (id, name, description) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(&item.name)
            .bind(&item.description)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Role insert failed");
                SystemError::validation("Query failed")
            })?;

        Self::insert_permissions(&mut tx, &id, &item.permissions)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Permission insert failed");
                SystemError::validation("Query failed")
            })?;

        tx.commit()
            .await
            .map_err(|_| SystemError::validation("Query failed"))?;

        self.get_once("id", &FilterValue::Text(id)).await
    }

    /// Update the role row and replace the permission association set;
    /// both writes commit or roll back together
    async fn update(&self, id: &str, item: &Role) -> Result<Role, SystemError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| SystemError::validation("Update failed"))?;

        let result = sqlx::query(
            "UPDATE roles SET name = ?, description = ?, updated_at = CURRENT_TIMESTAMP \
             WHERE deleted_at IS NULL AND id = ?",
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Role update failed");
            SystemError::validation("Update failed")
        })?;
        if result.rows_affected() == 0 {
            return Err(SystemError::validation("Update failed"));
        }

        sqlx::query("DELETE FROM permissions WHERE role_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Permission unlink failed");
                SystemError::validation("Update associations failed")
            })?;

        Self::insert_permissions(&mut tx, id, &item.permissions)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Permission relink failed");
                SystemError::validation("Update associations failed")
            })?;

        tx.commit()
            .await
            .map_err(|_| SystemError::validation("Update failed"))?;

        self.get_once("id", &FilterValue::Text(id.to_string())).await
    }

    async fn delete(&self, id: &str) -> Result<(), SystemError> {
        self.crud.delete(id).await
    }
}

impl RoleContract for RoleRepository {
    async fn get_permissions(&self, role_id: &str) -> Result<Vec<Permission>, SystemError> {
        let exists = self
            .crud
            .exists("id", &FilterValue::Text(role_id.to_string()))
            .await?;
        if !exists {
            return Err(SystemError::validation("Role not found"));
        }
        self.load_permissions(role_id).await
    }
}
