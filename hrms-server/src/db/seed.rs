//! Startup seed data
//!
//! Idempotent baseline rows: the permission catalog attached to a default
//! Admin role (keyed by name) and a batch of demo users (keyed by email).

use shared::error::SystemError;
use shared::models::{PERMISSION_CATALOG, Role, User, UserType};
use shared::query::FilterValue;
use uuid::Uuid;

use crate::contracts::{Cryptography, ReadOperation, WriteOperation};
use crate::core::ServerState;

const DEMO_USER_COUNT: usize = 100;
const DEMO_PASSWORD: &str = "Password123!";

pub async fn run(state: &ServerState) -> Result<(), SystemError> {
    seed_permissions(state).await?;
    seed_demo_users(state).await?;
    Ok(())
}

/// Ensure the default Admin role exists and carries the full permission
/// catalog
async fn seed_permissions(state: &ServerState) -> Result<(), SystemError> {
    let admin_name = FilterValue::Text("Admin".into());
    let admin = if state.roles.exists("name", &admin_name).await? {
        state.roles.get_once("name", &admin_name).await?
    } else {
        state
            .roles
            .create(&Role {
                id: String::new(),
                name: "Admin".into(),
                description: "Default administrator role".into(),
                permissions: Vec::new(),
            })
            .await?
    };

    let mut inserted = 0u32;
    for (name, description) in PERMISSION_CATALOG {
        let known: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM permissions WHERE name = ?")
            .bind(name)
            .fetch_one(&state.pool)
            .await
            .map_err(|e| SystemError::internal(format!("Permission seed failed: {e}")))?;
        if known > 0 {
            continue;
        }
        sqlx::query("INSERT INTO permissions (id, name, description, role_id) VALUES (?, ?, ?, ?)")
            .bind(Uuid::new_v4().to_string())
            .bind(name)
            .bind(description)
            .bind(&admin.id)
            .execute(&state.pool)
            .await
            .map_err(|e| SystemError::internal(format!("Permission seed failed: {e}")))?;
        inserted += 1;
    }

    if inserted > 0 {
        tracing::info!(inserted, "Seeded permission catalog");
    }
    Ok(())
}

/// Seed demo users; all share one pre-computed hash so startup does not
/// pay for a hundred Argon2 runs
async fn seed_demo_users(state: &ServerState) -> Result<(), SystemError> {
    let password = state.cryptography.encode_password(DEMO_PASSWORD)?;

    let mut inserted = 0u32;
    for i in 1..=DEMO_USER_COUNT {
        let email = format!("demo.user{i:03}@hrms.local");
        if state
            .users
            .exists("email", &FilterValue::Text(email.clone()))
            .await?
        {
            continue;
        }

        state
            .users
            .create(&User {
                id: String::new(),
                username: format!("demo.user{i:03}"),
                name: "Demo".into(),
                last_name: format!("User {i}"),
                password: password.clone(),
                email,
                user_type: UserType::Normal,
                active: true,
                picture: String::new(),
                role: String::new(),
            })
            .await?;
        inserted += 1;
    }

    if inserted > 0 {
        tracing::info!(inserted, "Seeded demo users");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::core::{Config, JwtConfig, ServerState};

    fn memory_config() -> Config {
        Config {
            database_url: "sqlite::memory:".into(),
            server_port: 0,
            environment: "development".into(),
            jwt: JwtConfig {
                secret: "test-secret-at-least-32-bytes-long!".into(),
                expiration_hours: 1,
                issuer: "hrms-server".into(),
            },
            read_timeout_secs: 10,
            write_timeout_secs: 10,
            shutdown_timeout_ms: 1000,
            max_connections: 1,
        }
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let state = ServerState::initialize(&memory_config()).await.unwrap();

        let roles: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM roles WHERE name = 'Admin'")
            .fetch_one(&state.pool)
            .await
            .unwrap();
        assert_eq!(roles, 1);

        let permissions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM permissions")
            .fetch_one(&state.pool)
            .await
            .unwrap();
        assert_eq!(permissions, 15);

        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&state.pool)
            .await
            .unwrap();
        assert_eq!(users, 100);

        // a second pass changes nothing
        super::run(&state).await.unwrap();
        let users_again: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&state.pool)
            .await
            .unwrap();
        assert_eq!(users_again, 100);
    }
}
