//! Create role use case

use shared::error::SystemError;
use shared::models::{CreateRole, RoleItem};
use shared::query::FilterValue;

use crate::contracts::{ReadOperation, RoleContract, WriteOperation};
use crate::usecases::GenericRequest;
use crate::utils::{MAX_NAME_LEN, validate_text_len};

pub struct CreateRoleUseCase<'a, C> {
    repository: &'a C,
    request: GenericRequest<CreateRole>,
}

impl<'a, C: RoleContract> CreateRoleUseCase<'a, C> {
    pub fn new(repository: &'a C, request: GenericRequest<CreateRole>) -> Self {
        Self {
            repository,
            request,
        }
    }

    pub async fn validate(&self) -> Result<(), SystemError> {
        let request = self.request.build();
        if request.name.is_empty() {
            return Err(SystemError::validation("Name is required"));
        }
        validate_text_len(&request.name, "Name", MAX_NAME_LEN)?;
        if request.description.is_empty() {
            return Err(SystemError::validation("Description is required"));
        }
        if request.permissions.is_empty() {
            return Err(SystemError::validation("Permissions are required"));
        }

        let taken = self
            .repository
            .exists("name", &FilterValue::Text(request.name.clone()))
            .await?;
        if taken {
            return Err(SystemError::validation("Role already exists"));
        }
        Ok(())
    }

    pub async fn execute(&self) -> Result<RoleItem, SystemError> {
        let role = self.request.build().clone().into_role();
        let created = self.repository.create(&role).await?;
        Ok(created.to_role_item())
    }
}
