//! Delete role use case

use shared::error::SystemError;
use shared::query::{Filter, FilterValue};

use crate::contracts::{ReadOperation, RoleContract, WriteOperation};
use crate::usecases::GenericRequest;

pub struct DeleteRoleUseCase<'a, C> {
    repository: &'a C,
    request: GenericRequest<Filter>,
}

impl<'a, C: RoleContract> DeleteRoleUseCase<'a, C> {
    pub fn new(repository: &'a C, request: GenericRequest<Filter>) -> Self {
        Self {
            repository,
            request,
        }
    }

    pub async fn validate(&self) -> Result<(), SystemError> {
        let request = self.request.build();
        if request.key.is_empty() || request.value.is_null() {
            return Err(SystemError::validation("Key and Value are required"));
        }
        if request.key != "id" {
            return Err(SystemError::validation("Key must be id"));
        }

        let exists = self.repository.exists(&request.key, &request.value).await?;
        if !exists {
            return Err(SystemError::validation("Role not found"));
        }
        Ok(())
    }

    pub async fn execute(&self) -> Result<(), SystemError> {
        let request = self.request.build();
        let FilterValue::Text(id) = &request.value else {
            return Err(SystemError::validation("Key must be id"));
        };
        self.repository
            .delete(id)
            .await
            .map_err(|_| SystemError::internal("Error deleting role"))
    }
}
