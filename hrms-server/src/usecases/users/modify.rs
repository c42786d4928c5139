//! Modify user use case

use shared::error::SystemError;
use shared::models::{ModifyUser, UserData};
use shared::query::FilterValue;

use crate::contracts::{ReadOperation, UserContract, WriteOperation};
use crate::usecases::GenericRequest;

/// Updates an existing user. An empty incoming password keeps the stored
/// hash (repository-level merge); the result is typed, never a
/// type-erased intermediate.
pub struct ModifyUserUseCase<'a, C> {
    user_contract: &'a C,
    request: GenericRequest<ModifyUser>,
}

impl<'a, C: UserContract> ModifyUserUseCase<'a, C> {
    pub fn new(user_contract: &'a C, request: GenericRequest<ModifyUser>) -> Self {
        Self {
            user_contract,
            request,
        }
    }

    /// Required fields plus existence of the target row
    pub async fn validate(&self) -> Result<(), SystemError> {
        let request = self.request.build();
        request.validate()?;

        let known = self
            .user_contract
            .exists("id", &FilterValue::Text(request.id.clone()))
            .await?;
        if !known {
            return Err(SystemError::validation("user does not exist"));
        }
        Ok(())
    }

    pub async fn execute(&self) -> Result<UserData, SystemError> {
        let request = self.request.build().clone();
        let id = request.id.clone();
        let user = request.into_user();

        let updated = self.user_contract.update(&id, &user).await?;
        Ok(updated.to_user_data())
    }
}
