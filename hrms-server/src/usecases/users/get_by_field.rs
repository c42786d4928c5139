//! Get user by field use case

use shared::error::SystemError;
use shared::models::UserData;
use shared::query::Filter;

use crate::contracts::{ReadOperation, UserContract};
use crate::usecases::GenericRequest;

/// Single-user lookup by one of the addressable fields.
pub struct GetUserByFieldUseCase<'a, C> {
    user_contract: &'a C,
    request: GenericRequest<Filter>,
}

impl<'a, C: UserContract> GetUserByFieldUseCase<'a, C> {
    pub fn new(user_contract: &'a C, request: GenericRequest<Filter>) -> Self {
        Self {
            user_contract,
            request,
        }
    }

    pub async fn validate(&self) -> Result<(), SystemError> {
        let request = self.request.build();
        if request.key.is_empty() || request.value.is_null() {
            return Err(SystemError::validation("Key and Value are required"));
        }
        if !matches!(request.key.as_str(), "username" | "email" | "id") {
            return Err(SystemError::validation(
                "Key must be username, email or id",
            ));
        }

        let exists = self
            .user_contract
            .exists(&request.key, &request.value)
            .await
            .map_err(|_| SystemError::internal("Error checking if user exists"))?;
        if !exists {
            return Err(SystemError::validation("User not found"));
        }
        Ok(())
    }

    pub async fn execute(&self) -> Result<UserData, SystemError> {
        let request = self.request.build();
        let user = self
            .user_contract
            .get_once(&request.key, &request.value)
            .await
            .map_err(|_| SystemError::internal("Error getting user"))?;
        Ok(user.to_user_data())
    }
}
