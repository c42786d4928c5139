//! List users use case

use shared::error::SystemError;
use shared::models::{User, UserData};
use shared::query::{PaginatedResponse, SearchQuery};

use crate::contracts::{ReadOperation, UserContract};
use crate::usecases::GenericRequest;

/// Paginated user listing; rows come back as public projections.
pub struct ListUserUseCase<'a, C> {
    user_contract: &'a C,
    request: GenericRequest<SearchQuery>,
}

impl<'a, C: UserContract> ListUserUseCase<'a, C> {
    pub fn new(user_contract: &'a C, request: GenericRequest<SearchQuery>) -> Self {
        Self {
            user_contract,
            request,
        }
    }

    /// Filters must name declared user fields with matching kinds
    pub async fn validate(&self) -> Result<(), SystemError> {
        self.request.build().filters.validate::<User>()
    }

    pub async fn execute(&self) -> Result<PaginatedResponse<UserData>, SystemError> {
        let page = self
            .user_contract
            .get_by_filter(self.request.build())
            .await?;
        Ok(PaginatedResponse {
            total_rows: page.total_rows,
            total_pages: page.total_pages,
            rows: page.rows.iter().map(User::to_user_data).collect(),
        })
    }
}
