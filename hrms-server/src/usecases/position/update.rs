//! Update position use case

use shared::error::SystemError;
use shared::models::{ModifyPosition, Position};
use shared::query::FilterValue;

use crate::contracts::{PositionContract, ReadOperation, WriteOperation};
use crate::usecases::GenericRequest;

pub struct UpdatePositionUseCase<'a, C> {
    repository: &'a C,
    request: GenericRequest<ModifyPosition>,
}

impl<'a, C: PositionContract> UpdatePositionUseCase<'a, C> {
    pub fn new(request: GenericRequest<ModifyPosition>, repository: &'a C) -> Self {
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
        if request.title.is_empty() {
            return Err(SystemError::validation("Title is required"));
        }
        if request.code.is_empty() {
            return Err(SystemError::validation("Code is required"));
        }
        if request.department_id.is_empty() {
            return Err(SystemError::validation("Department ID is required"));
        }

        let known = self
            .repository
            .exists("id", &FilterValue::Text(request.id.clone()))
            .await?;
        if !known {
            return Err(SystemError::validation("Position not found"));
        }

        // The code stays unique across the other positions
        let code = FilterValue::Text(request.code.clone());
        if self.repository.exists("code", &code).await? {
            let owner = self.repository.get_once("code", &code).await?;
            if owner.id != request.id {
                return Err(SystemError::validation("Position code already exists"));
            }
        }
        Ok(())
    }

    pub async fn execute(&self) -> Result<Position, SystemError> {
        let position = self.request.build().clone().into_position();
        let id = position.id.clone();
        self.repository
            .update(&id, &position)
            .await
            .map_err(|_| SystemError::internal("Failed to update position"))
    }
}
