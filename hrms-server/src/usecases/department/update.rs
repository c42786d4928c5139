//! Update department use case

use shared::error::SystemError;
use shared::models::Department;
use shared::query::FilterValue;

use crate::contracts::{DepartmentContract, ReadOperation, WriteOperation};
use crate::usecases::GenericRequest;

pub struct UpdateDepartmentUseCase<'a, C> {
    repository: &'a C,
    request: GenericRequest<Department>,
}

impl<'a, C: DepartmentContract> UpdateDepartmentUseCase<'a, C> {
    pub fn new(request: GenericRequest<Department>, repository: &'a C) -> Self {
        Self {
            repository,
            request,
        }
    }

    /// Target row must exist; the new name must not belong to another row
    pub async fn validate(&self) -> Result<(), SystemError> {
        let request = self.request.build();
        if request.id.is_empty() {
            return Err(SystemError::validation("id is required"));
        }
        if request.name.is_empty() {
            return Err(SystemError::validation("Name is empty"));
        }

        let known = self
            .repository
            .exists("id", &FilterValue::Text(request.id.clone()))
            .await?;
        if !known {
            return Err(SystemError::validation("Department not found"));
        }

        let name = FilterValue::Text(request.name.clone());
        if self.repository.exists("name", &name).await? {
            let owner = self.repository.get_once("name", &name).await?;
            if owner.id != request.id {
                return Err(SystemError::validation("Name already exists"));
            }
        }
        Ok(())
    }

    pub async fn execute(&self) -> Result<Department, SystemError> {
        let request = self.request.build();
        self.repository
            .update(&request.id, request)
            .await
            .map_err(|_| SystemError::validation("Failed to update department"))
    }
}
