//! Get department by id use case

use shared::error::SystemError;
use shared::models::Department;
use shared::query::Filter;

use crate::contracts::{DepartmentContract, ReadOperation};
use crate::usecases::GenericRequest;

pub struct GetDepartmentByIdUseCase<'a, C> {
    repository: &'a C,
    request: GenericRequest<Filter>,
}

impl<'a, C: DepartmentContract> GetDepartmentByIdUseCase<'a, C> {
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
            return Err(SystemError::validation("Department not found"));
        }
        Ok(())
    }

    pub async fn execute(&self) -> Result<Department, SystemError> {
        let request = self.request.build();
        self.repository
            .get_once(&request.key, &request.value)
            .await
            .map_err(|_| SystemError::validation("Department not found"))
    }
}
