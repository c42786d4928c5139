//! Shared server state

use std::sync::Arc;

use shared::error::SystemError;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::repository::{
    DepartmentRepository, PermissionRepository, PositionRepository, RoleRepository,
    UserRepository,
};
use crate::db::{DbService, seed};
use crate::security::Argon2Cryptography;

/// Server state - shared handles for every request
///
/// Cloning is cheap: the pool and JWT service are reference-counted and
/// the repositories hold pool clones. No request-scoped data lives here;
/// cancellation rides each call's future.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Database pool
    pub pool: sqlx::SqlitePool,
    /// JWT service (shared ownership)
    pub jwt_service: Arc<JwtService>,
    /// Password hashing
    pub cryptography: Argon2Cryptography,
    /// Per-entity repositories
    pub users: UserRepository,
    pub departments: DepartmentRepository,
    pub positions: PositionRepository,
    pub roles: RoleRepository,
    pub permissions: PermissionRepository,
}

impl ServerState {
    /// Connect to the database, apply migrations, seed baseline data and
    /// wire up the repositories
    pub async fn initialize(config: &Config) -> Result<Self, SystemError> {
        let db = DbService::new(config).await?;
        let pool = db.pool;

        let state = Self {
            config: config.clone(),
            pool: pool.clone(),
            jwt_service: Arc::new(JwtService::new(config.jwt.clone())),
            cryptography: Argon2Cryptography::new(),
            users: UserRepository::new(pool.clone()),
            departments: DepartmentRepository::new(pool.clone()),
            positions: PositionRepository::new(pool.clone()),
            roles: RoleRepository::new(pool.clone()),
            permissions: PermissionRepository::new(pool),
        };

        seed::run(&state).await?;

        Ok(state)
    }
}
