//! List departments use case

use shared::error::SystemError;
use shared::models::Department;
use shared::query::{PaginatedResponse, SearchQuery};

use crate::contracts::{DepartmentContract, ReadOperation};
use crate::usecases::GenericRequest;

pub struct ListDepartmentUseCase<'a, C> {
    repository: &'a C,
    request: GenericRequest<SearchQuery>,
}

impl<'a, C: DepartmentContract> ListDepartmentUseCase<'a, C> {
    pub fn new(request: GenericRequest<SearchQuery>, repository: &'a C) -> Self {
        Self {
            repository,
            request,
        }
    }

    pub async fn validate(&self) -> Result<(), SystemError> {
        self.request.build().filters.validate::<Department>()
    }

    pub async fn execute(&self) -> Result<PaginatedResponse<Department>, SystemError> {
        self.repository
            .get_by_filter(self.request.build())
            .await
            .map_err(|_| SystemError::internal("Failed to list departments"))
    }
}
