//! Create position use case

use shared::error::SystemError;
use shared::models::{CreatePosition, Position};
use shared::query::FilterValue;

use crate::contracts::{PositionContract, ReadOperation, WriteOperation};
use crate::usecases::GenericRequest;
use crate::utils::{MAX_NAME_LEN, validate_text_len};

pub struct CreatePositionUseCase<'a, C> {
    repository: &'a C,
    request: GenericRequest<CreatePosition>,
}

impl<'a, C: PositionContract> CreatePositionUseCase<'a, C> {
    pub fn new(request: GenericRequest<CreatePosition>, repository: &'a C) -> Self {
        Self {
            repository,
            request,
        }
    }

    /// Required fields, positive headcount and a unique code
    pub async fn validate(&self) -> Result<(), SystemError> {
        let request = self.request.build();
        if request.title.is_empty() {
            return Err(SystemError::validation("Title is required"));
        }
        validate_text_len(&request.title, "Title", MAX_NAME_LEN)?;
        if request.code.is_empty() {
            return Err(SystemError::validation("Code is required"));
        }
        if request.department_id.is_empty() {
            return Err(SystemError::validation("Department ID is required"));
        }
        if request.max_employees <= 0 {
            return Err(SystemError::validation(
                "Max employees must be greater than 0",
            ));
        }

        let taken = self
            .repository
            .exists("code", &FilterValue::Text(request.code.clone()))
            .await?;
        if taken {
            return Err(SystemError::validation("Position code already exists"));
        }
        Ok(())
    }

    pub async fn execute(&self) -> Result<Position, SystemError> {
        let position = self.request.build().clone().into_position();
        self.repository
            .create(&position)
            .await
            .map_err(|_| SystemError::internal("Failed to create position"))
    }
}
