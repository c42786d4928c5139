//! User Repository

use shared::error::SystemError;
use shared::models::User;
use shared::query::{FilterValue, PaginatedResponse, SearchQuery};
use sqlx::SqlitePool;

use crate::contracts::{ReadOperation, UserContract, WriteOperation};
use crate::db::records::{self, UserRecord};
use crate::db::repository::CrudRepository;

#[derive(Clone)]
pub struct UserRepository {
    crud: CrudRepository<User, UserRecord>,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            crud: CrudRepository::new(pool, records::user_to_record, records::user_to_entity),
        }
    }
}

impl ReadOperation<User> for UserRepository {
    async fn get_by_filter(
        &self,
        query: &SearchQuery,
    ) -> Result<PaginatedResponse<User>, SystemError> {
        self.crud.get_by_filter(query).await
    }

    async fn get_once(&self, key: &str, value: &FilterValue) -> Result<User, SystemError> {
        self.crud.get_once(key, value).await
    }

    async fn exists(&self, key: &str, value: &FilterValue) -> Result<bool, SystemError> {
        self.crud.exists(key, value).await
    }
}

impl WriteOperation<User> for UserRepository {
    async fn create(&self, item: &User) -> Result<User, SystemError> {
        self.crud.create(item).await
    }

    /// An empty incoming password keeps the stored hash; callers send the
    /// password only when changing it
    async fn update(&self, id: &str, item: &User) -> Result<User, SystemError> {
        if item.password.is_empty() {
            let stored = self
                .crud
                .get_once("id", &FilterValue::Text(id.to_string()))
                .await?;
            let mut merged = item.clone();
            merged.password = stored.password;
            return self.crud.update(id, &merged).await;
        }
        self.crud.update(id, item).await
    }

    async fn delete(&self, id: &str) -> Result<(), SystemError> {
        self.crud.delete(id).await
    }
}

impl UserContract for UserRepository {}
