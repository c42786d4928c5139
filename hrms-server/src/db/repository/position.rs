//! Position Repository

use shared::error::SystemError;
use shared::models::Position;
use shared::query::{FilterValue, PaginatedResponse, SearchQuery};
use sqlx::SqlitePool;

use crate::contracts::{PositionContract, ReadOperation, WriteOperation};
use crate::db::records::{self, PositionRecord};
use crate::db::repository::CrudRepository;

#[derive(Clone)]
pub struct PositionRepository {
    crud: CrudRepository<Position, PositionRecord>,
}

impl PositionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            crud: CrudRepository::new(
                pool,
                records::position_to_record,
                records::position_to_entity,
            ),
        }
    }
}

impl ReadOperation<Position> for PositionRepository {
    async fn get_by_filter(
        &self,
        query: &SearchQuery,
    ) -> Result<PaginatedResponse<Position>, SystemError> {
        self.crud.get_by_filter(query).await
    }

    async fn get_once(&self, key: &str, value: &FilterValue) -> Result<Position, SystemError> {
        self.crud.get_once(key, value).await
    }

    async fn exists(&self, key: &str, value: &FilterValue) -> Result<bool, SystemError> {
        self.crud.exists(key, value).await
    }
}

impl WriteOperation<Position> for PositionRepository {
    async fn create(&self, item: &Position) -> Result<Position, SystemError> {
        self.crud.create(item).await
    }

    async fn update(&self, id: &str, item: &Position) -> Result<Position, SystemError> {
        self.crud.update(id, item).await
    }

    async fn delete(&self, id: &str) -> Result<(), SystemError> {
        self.crud.delete(id).await
    }
}

impl PositionContract for PositionRepository {}
