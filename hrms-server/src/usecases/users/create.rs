//! Create user use case

use shared::error::SystemError;
use shared::models::{CreateUser, UserData};
use shared::query::FilterValue;

use crate::contracts::{Cryptography, ReadOperation, UserContract, WriteOperation};
use crate::usecases::GenericRequest;
use crate::utils::{MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_text_len};

/// Handles signup: validates the payload, enforces username uniqueness,
/// hashes the password through the cryptography collaborator and persists
/// the new user as active.
pub struct CreateUserUseCase<'a, C, K> {
    user_contract: &'a C,
    cryptography: &'a K,
    request: GenericRequest<CreateUser>,
}

impl<'a, C, K> CreateUserUseCase<'a, C, K>
where
    C: UserContract,
    K: Cryptography,
{
    pub fn new(
        user_contract: &'a C,
        cryptography: &'a K,
        request: GenericRequest<CreateUser>,
    ) -> Self {
        Self {
            user_contract,
            cryptography,
            request,
        }
    }

    /// Required fields plus username uniqueness
    pub async fn validate(&self) -> Result<(), SystemError> {
        let request = self.request.build();
        request.validate()?;
        validate_text_len(&request.username, "username", MAX_NAME_LEN)?;
        validate_text_len(&request.password, "password", MAX_PASSWORD_LEN)?;
        validate_text_len(&request.email, "email", MAX_EMAIL_LEN)?;

        let taken = self
            .user_contract
            .exists("username", &FilterValue::Text(request.username.clone()))
            .await?;
        if taken {
            return Err(SystemError::validation("user already exists"));
        }
        Ok(())
    }

    /// Hash the password and persist; the result is the public projection
    pub async fn execute(&self) -> Result<UserData, SystemError> {
        let mut user = self.request.build().clone().into_user();
        user.password = self.cryptography.encode_password(&user.password)?;

        let created = self.user_contract.create(&user).await?;
        Ok(created.to_user_data())
    }
}
