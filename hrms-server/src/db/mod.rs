//! Database Module
//!
//! SQLite connection pool, migrations and seed data.

pub mod records;
pub mod repository;
pub mod seed;

use std::str::FromStr;

use shared::error::SystemError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::core::Config;

/// Database service — owns a SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the database with WAL mode and apply migrations
    ///
    /// Connection and migration failures are fatal for the process; the
    /// caller exits on error.
    pub async fn new(config: &Config) -> Result<Self, SystemError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| SystemError::internal(format!("Invalid database URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| SystemError::internal(format!("Failed to connect to database: {e}")))?;

        // busy_timeout: wait on write contention instead of failing fast
        sqlx::query("PRAGMA busy_timeout = 5000;")
            .execute(&pool)
            .await
            .map_err(|e| SystemError::internal(format!("Failed to set busy_timeout: {e}")))?;

        tracing::info!("Database connection established (SQLite WAL, busy_timeout=5000ms)");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| SystemError::migration(format!("Failed to migrate database: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }
}
