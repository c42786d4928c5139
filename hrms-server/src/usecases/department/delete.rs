//! Delete department use case

use shared::error::SystemError;
use shared::query::{Filter, FilterValue};

use crate::contracts::{DepartmentContract, ReadOperation, WriteOperation};
use crate::usecases::GenericRequest;

pub struct DeleteDepartmentUseCase<'a, C> {
    repository: &'a C,
    request: GenericRequest<Filter>,
}

impl<'a, C: DepartmentContract> DeleteDepartmentUseCase<'a, C> {
    pub fn new(repository: &'a C, request: GenericRequest<Filter>) -> Self {
        Self {
            repository,
            request,
        }
    }

    /// Only deletion by id is allowed, and the row must exist first
    pub async fn validate(&self) -> Result<(), SystemError> {
        let request = self.request.build();
        if request.key.is_empty() || request.value.is_null() {
            return Err(SystemError::validation("Key and Value are required"));
        }
        if request.key != "id" {
            return Err(SystemError::validation("Key must be id"));
        }

        let exists = self
            .repository
            .exists(&request.key, &request.value)
            .await
            .map_err(|_| SystemError::internal("Error checking if department exists"))?;
        if !exists {
            return Err(SystemError::validation("Department not found"));
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
            .map_err(|_| SystemError::internal("Error deleting department"))
    }
}
