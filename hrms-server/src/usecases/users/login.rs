//! Login use case

use shared::error::SystemError;
use shared::models::{LoginUser, User, UserData};
use shared::query::{Filter, Filters, SearchQuery};

use crate::contracts::{Cryptography, ReadOperation, UserContract};
use crate::usecases::GenericRequest;

/// Checks credentials against the stored hash and yields the public user
/// projection for the boundary to wrap in a signed token.
pub struct LoginUserUseCase<'a, C, K> {
    user_contract: &'a C,
    cryptography: &'a K,
    request: GenericRequest<LoginUser>,
}

impl<'a, C, K> LoginUserUseCase<'a, C, K>
where
    C: UserContract,
    K: Cryptography,
{
    pub fn new(
        user_contract: &'a C,
        cryptography: &'a K,
        request: GenericRequest<LoginUser>,
    ) -> Self {
        Self {
            user_contract,
            cryptography,
            request,
        }
    }

    async fn find_user(&self) -> Result<Option<User>, SystemError> {
        let request = self.request.build();
        let query = SearchQuery {
            filters: Filters(vec![Filter::new("username", request.username.as_str())]),
            pagination: Default::default(),
        };
        let page = self.user_contract.get_by_filter(&query).await?;
        Ok(page.rows.into_iter().next())
    }

    pub async fn validate(&self) -> Result<(), SystemError> {
        let request = self.request.build();
        if request.username.is_empty() || request.password.is_empty() {
            return Err(SystemError::validation("request is empty"));
        }

        let Some(user) = self.find_user().await? else {
            return Err(SystemError::validation("user does not exist"));
        };

        let valid = self
            .cryptography
            .compare_password(&request.password, &user.password)?;
        if !valid {
            return Err(SystemError::validation("incorrect password"));
        }
        Ok(())
    }

    pub async fn execute(&self) -> Result<UserData, SystemError> {
        let user = self
            .find_user()
            .await?
            .ok_or_else(|| SystemError::validation("user does not exist"))?;
        Ok(user.to_user_data())
    }
}
