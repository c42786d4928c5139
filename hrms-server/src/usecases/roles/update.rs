//! Update role use case

use shared::error::SystemError;
use shared::models::Role;
use shared::query::FilterValue;

use crate::contracts::{ReadOperation, RoleContract, WriteOperation};
use crate::usecases::GenericRequest;

pub struct UpdateRoleUseCase<'a, C> {
    repository: &'a C,
    request: GenericRequest<Role>,
}

impl<'a, C: RoleContract> UpdateRoleUseCase<'a, C> {
    pub fn new(repository: &'a C, request: GenericRequest<Role>) -> Self {
        Self {
            repository,
            request,
        }
    }

    pub async fn validate(&self) -> Result<(), SystemError> {
        let request = self.request.build();
        if request.id.is_empty() {
            return Err(SystemError::validation("ID is required"));
        }
        if request.name.is_empty() {
            return Err(SystemError::validation("Name is required"));
        }

        let known = self
            .repository
            .exists("id", &FilterValue::Text(request.id.clone()))
            .await?;
        if !known {
            return Err(SystemError::validation("Role not found"));
        }

        let name = FilterValue::Text(request.name.clone());
        if self.repository.exists("name", &name).await? {
            let owner = self.repository.get_once("name", &name).await?;
            if owner.id != request.id {
                return Err(SystemError::validation("Role already exists"));
            }
        }
        Ok(())
    }

    pub async fn execute(&self) -> Result<Role, SystemError> {
        let request = self.request.build();
        self.repository.update(&request.id, request).await
    }
}
