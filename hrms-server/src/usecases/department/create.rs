//! Create department use case

use shared::error::SystemError;
use shared::models::Department;
use shared::query::FilterValue;

use crate::contracts::{DepartmentContract, ReadOperation, WriteOperation};
use crate::usecases::GenericRequest;
use crate::utils::{MAX_NAME_LEN, validate_text_len};

pub struct CreateDepartmentUseCase<'a, C> {
    repository: &'a C,
    request: GenericRequest<Department>,
}

impl<'a, C: DepartmentContract> CreateDepartmentUseCase<'a, C> {
    pub fn new(request: GenericRequest<Department>, repository: &'a C) -> Self {
        Self {
            repository,
            request,
        }
    }

    /// Name is required and unique
    pub async fn validate(&self) -> Result<(), SystemError> {
        let request = self.request.build();
        if request.name.is_empty() {
            return Err(SystemError::validation("Name is empty"));
        }
        validate_text_len(&request.name, "Name", MAX_NAME_LEN)?;
        let taken = self
            .repository
            .exists("name", &FilterValue::Text(request.name.clone()))
            .await?;
        if taken {
            return Err(SystemError::validation("Name already exists"));
        }
        Ok(())
    }

    pub async fn execute(&self) -> Result<Department, SystemError> {
        self.repository
            .create(self.request.build())
            .await
            .map_err(|_| SystemError::validation("Failed to create department"))
    }
}
