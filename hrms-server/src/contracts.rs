//! Repository and collaborator contracts
//!
//! Narrow per-entity interfaces the use cases depend on. The generic CRUD
//! repository satisfies the read/write operations; entity repositories add
//! the odd specialized method (role permissions, catalog listing).

use shared::error::SystemError;
use shared::models::{Department, Permission, Position, Role, User};
use shared::query::{FilterValue, PaginatedResponse, SearchQuery};

/// Basic read operations over an entity
#[allow(async_fn_in_trait)]
pub trait ReadOperation<T> {
    /// Fetch a page of entities matching the query's filters
    async fn get_by_filter(
        &self,
        query: &SearchQuery,
    ) -> Result<PaginatedResponse<T>, SystemError>;

    /// Fetch a single entity by exact field equality
    async fn get_once(&self, key: &str, value: &FilterValue) -> Result<T, SystemError>;

    /// Whether a row with `key = value` exists
    async fn exists(&self, key: &str, value: &FilterValue) -> Result<bool, SystemError>;
}

/// Basic write operations over an entity
#[allow(async_fn_in_trait)]
pub trait WriteOperation<T> {
    /// Persist a new entity, returning it with its generated identity
    async fn create(&self, item: &T) -> Result<T, SystemError>;

    /// Update the entity stored under `id`
    async fn update(&self, id: &str, item: &T) -> Result<T, SystemError>;

    /// Remove the entity stored under `id`
    async fn delete(&self, id: &str) -> Result<(), SystemError>;
}

/// User persistence contract
pub trait UserContract: ReadOperation<User> + WriteOperation<User> {}

/// Department persistence contract
pub trait DepartmentContract: ReadOperation<Department> + WriteOperation<Department> {}

/// Position persistence contract
pub trait PositionContract: ReadOperation<Position> + WriteOperation<Position> {}

/// Role persistence contract
#[allow(async_fn_in_trait)]
pub trait RoleContract: ReadOperation<Role> + WriteOperation<Role> {
    /// Permissions owned by a role
    async fn get_permissions(&self, role_id: &str) -> Result<Vec<Permission>, SystemError>;
}

/// Permission catalog contract
#[allow(async_fn_in_trait)]
pub trait PermissionContract {
    /// The full permission catalog
    async fn get_all(&self) -> Result<Vec<Permission>, SystemError>;
}

/// Password hash/compare capability
pub trait Cryptography {
    /// One-way hash of a plaintext password
    fn encode_password(&self, password: &str) -> Result<String, SystemError>;

    /// Whether `password` matches the stored `encoded` hash
    fn compare_password(&self, password: &str, encoded: &str) -> Result<bool, SystemError>;
}
