//! Get role use case

use shared::error::SystemError;
use shared::models::Role;
use shared::query::Filter;

use crate::contracts::{ReadOperation, RoleContract};
use crate::usecases::GenericRequest;

pub struct GetRoleUseCase<'a, C> {
    repository: &'a C,
    request: GenericRequest<Filter>,
}

impl<'a, C: RoleContract> GetRoleUseCase<'a, C> {
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
        Ok(())
    }

    pub async fn execute(&self) -> Result<Role, SystemError> {
        let request = self.request.build();
        self.repository
            .get_once(&request.key, &request.value)
            .await
            .map_err(|_| SystemError::validation("Role not found"))
    }
}
