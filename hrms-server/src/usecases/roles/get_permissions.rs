//! Get role permissions use case

use shared::error::SystemError;
use shared::models::Permission;

use crate::contracts::RoleContract;

pub struct GetPermissionsUseCase<'a, C> {
    repository: &'a C,
    role_id: String,
}

impl<'a, C: RoleContract> GetPermissionsUseCase<'a, C> {
    pub fn new(repository: &'a C, role_id: impl Into<String>) -> Self {
        Self {
            repository,
            role_id: role_id.into(),
        }
    }

    pub async fn validate(&self) -> Result<(), SystemError> {
        if self.role_id.is_empty() {
            return Err(SystemError::validation("Role ID is required"));
        }
        Ok(())
    }

    pub async fn execute(&self) -> Result<Vec<Permission>, SystemError> {
        self.repository.get_permissions(&self.role_id).await
    }
}
