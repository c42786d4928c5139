//! Department Repository

use shared::error::SystemError;
use shared::models::Department;
use shared::query::{FilterValue, PaginatedResponse, SearchQuery};
use sqlx::SqlitePool;

use crate::contracts::{DepartmentContract, ReadOperation, WriteOperation};
use crate::db::records::{self, DepartmentRecord};
use crate::db::repository::CrudRepository;

#[derive(Clone)]
pub struct DepartmentRepository {
    crud: CrudRepository<Department, DepartmentRecord>,
}

impl DepartmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            crud: CrudRepository::new(
                pool,
                records::department_to_record,
                records::department_to_entity,
            ),
        }
    }
}

impl ReadOperation<Department> for DepartmentRepository {
    async fn get_by_filter(
        &self,
        query: &SearchQuery,
    ) -> Result<PaginatedResponse<Department>, SystemError> {
        self.crud.get_by_filter(query).await
    }

    async fn get_once(&self, key: &str, value: &FilterValue) -> Result<Department, SystemError> {
        self.crud.get_once(key, value).await
    }

    async fn exists(&self, key: &str, value: &FilterValue) -> Result<bool, SystemError> {
        self.crud.exists(key, value).await
    }
}

impl WriteOperation<Department> for DepartmentRepository {
    async fn create(&self, item: &Department) -> Result<Department, SystemError> {
        self.crud.create(item).await
    }

    async fn update(&self, id: &str, item: &Department) -> Result<Department, SystemError> {
        self.crud.update(id, item).await
    }

    async fn delete(&self, id: &str) -> Result<(), SystemError> {
        self.crud.delete(id).await
    }
}

impl DepartmentContract for DepartmentRepository {}
