//! List positions use case

use shared::error::SystemError;
use shared::models::Position;
use shared::query::{PaginatedResponse, SearchQuery};

use crate::contracts::{PositionContract, ReadOperation};
use crate::usecases::GenericRequest;

pub struct ListPositionUseCase<'a, C> {
    repository: &'a C,
    request: GenericRequest<SearchQuery>,
}

impl<'a, C: PositionContract> ListPositionUseCase<'a, C> {
    pub fn new(request: GenericRequest<SearchQuery>, repository: &'a C) -> Self {
        Self {
            repository,
            request,
        }
    }

    pub async fn validate(&self) -> Result<(), SystemError> {
        self.request.build().filters.validate::<Position>()
    }

    pub async fn execute(&self) -> Result<PaginatedResponse<Position>, SystemError> {
        self.repository
            .get_by_filter(self.request.build())
            .await
            .map_err(|_| SystemError::internal("Failed to list positions"))
    }
}
