//! List roles use case

use shared::error::SystemError;
use shared::models::Role;
use shared::query::{PaginatedResponse, SearchQuery};

use crate::contracts::{ReadOperation, RoleContract};
use crate::usecases::GenericRequest;

pub struct ListRoleUseCase<'a, C> {
    repository: &'a C,
    request: GenericRequest<SearchQuery>,
}

impl<'a, C: RoleContract> ListRoleUseCase<'a, C> {
    pub fn new(request: GenericRequest<SearchQuery>, repository: &'a C) -> Self {
        Self {
            repository,
            request,
        }
    }

    pub async fn validate(&self) -> Result<(), SystemError> {
        self.request.build().filters.validate::<Role>()
    }

    pub async fn execute(&self) -> Result<PaginatedResponse<Role>, SystemError> {
        self.repository.get_by_filter(self.request.build()).await
    }
}
