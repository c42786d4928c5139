//! Use case tests against in-memory SQLite
//!
//! Exercises the full validate/execute protocol the HTTP handlers run,
//! including the flows behind signup, login and department management.

use std::str::FromStr;

use shared::models::{CreateUser, Department, LoginUser, ModifyUser, UserType};
use shared::query::{Filter, FilterValue, SearchQuery};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::auth::JwtService;
use crate::contracts::{ReadOperation, WriteOperation};
use crate::core::JwtConfig;
use crate::db::repository::{DepartmentRepository, PositionRepository, UserRepository};
use crate::security::Argon2Cryptography;
use crate::usecases::GenericRequest;
use crate::usecases::department::{DeleteDepartmentUseCase, ListDepartmentUseCase};
use crate::usecases::position::CreatePositionUseCase;
use crate::usecases::users::{CreateUserUseCase, LoginUserUseCase, ModifyUserUseCase};

async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .pragma("foreign_keys", "ON");
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

fn create_user_payload(username: &str, email: &str) -> CreateUser {
    CreateUser {
        username: username.into(),
        password: "secret123".into(),
        email: email.into(),
        role: String::new(),
        name: String::new(),
        last_name: String::new(),
        user_type: UserType::Normal,
        picture: String::new(),
    }
}

async fn create_user(pool: &SqlitePool, username: &str, email: &str) {
    let users = UserRepository::new(pool.clone());
    let crypto = Argon2Cryptography::new();
    let usecase = CreateUserUseCase::new(
        &users,
        &crypto,
        GenericRequest::new(create_user_payload(username, email)),
    );
    usecase.validate().await.unwrap();
    usecase.execute().await.unwrap();
}

#[tokio::test]
async fn test_create_user_hashes_password_and_starts_active() {
    let pool = memory_pool().await;
    let users = UserRepository::new(pool.clone());
    let crypto = Argon2Cryptography::new();

    let usecase = CreateUserUseCase::new(
        &users,
        &crypto,
        GenericRequest::new(create_user_payload("alice", "a@x.com")),
    );
    usecase.validate().await.unwrap();
    let data = usecase.execute().await.unwrap();

    assert!(!data.id.is_empty());
    assert!(data.active);
    assert_eq!(data.username, "alice");
    // projection never carries the password field at all
    let json = serde_json::to_string(&data).unwrap();
    assert!(!json.contains("password"));

    // at rest the password is a salted hash, not the plaintext
    let stored = users
        .get_once("username", &FilterValue::Text("alice".into()))
        .await
        .unwrap();
    assert_ne!(stored.password, "secret123");
    assert!(stored.password.starts_with("$argon2"));
}

#[tokio::test]
async fn test_create_user_rejects_duplicate_username() {
    let pool = memory_pool().await;
    create_user(&pool, "alice", "a@x.com").await;

    let users = UserRepository::new(pool.clone());
    let crypto = Argon2Cryptography::new();
    let usecase = CreateUserUseCase::new(
        &users,
        &crypto,
        GenericRequest::new(create_user_payload("alice", "other@x.com")),
    );
    let err = usecase.validate().await.unwrap_err();
    assert_eq!(err.message, "user already exists");
}

#[tokio::test]
async fn test_create_user_requires_fields() {
    let pool = memory_pool().await;
    let users = UserRepository::new(pool.clone());
    let crypto = Argon2Cryptography::new();

    let mut payload = create_user_payload("alice", "a@x.com");
    payload.password = String::new();
    let usecase = CreateUserUseCase::new(&users, &crypto, GenericRequest::new(payload));
    let err = usecase.validate().await.unwrap_err();
    assert_eq!(err.message, "password is required");
}

#[tokio::test]
async fn test_login_with_wrong_password_fails() {
    let pool = memory_pool().await;
    create_user(&pool, "alice", "a@x.com").await;

    let users = UserRepository::new(pool.clone());
    let crypto = Argon2Cryptography::new();
    let usecase = LoginUserUseCase::new(
        &users,
        &crypto,
        GenericRequest::new(LoginUser {
            username: "alice".into(),
            password: "wrong-password".into(),
        }),
    );
    let err = usecase.validate().await.unwrap_err();
    assert_eq!(err.message, "incorrect password");
}

#[tokio::test]
async fn test_login_with_unknown_user_fails() {
    let pool = memory_pool().await;
    let users = UserRepository::new(pool.clone());
    let crypto = Argon2Cryptography::new();

    let usecase = LoginUserUseCase::new(
        &users,
        &crypto,
        GenericRequest::new(LoginUser {
            username: "nobody".into(),
            password: "whatever".into(),
        }),
    );
    let err = usecase.validate().await.unwrap_err();
    assert_eq!(err.message, "user does not exist");

    let usecase = LoginUserUseCase::new(
        &users,
        &crypto,
        GenericRequest::new(LoginUser {
            username: String::new(),
            password: String::new(),
        }),
    );
    let err = usecase.validate().await.unwrap_err();
    assert_eq!(err.message, "request is empty");
}

#[tokio::test]
async fn test_login_success_yields_projection_and_token_round_trips() {
    let pool = memory_pool().await;
    create_user(&pool, "alice", "a@x.com").await;

    let users = UserRepository::new(pool.clone());
    let crypto = Argon2Cryptography::new();
    let usecase = LoginUserUseCase::new(
        &users,
        &crypto,
        GenericRequest::new(LoginUser {
            username: "alice".into(),
            password: "secret123".into(),
        }),
    );
    usecase.validate().await.unwrap();
    let data = usecase.execute().await.unwrap();
    assert_eq!(data.username, "alice");

    let jwt = JwtService::new(JwtConfig {
        secret: "test-secret-at-least-32-bytes-long!".into(),
        expiration_hours: 1,
        issuer: "hrms-server".into(),
    });
    let token = jwt.generate_token(&data).unwrap();
    let claims = jwt.validate_token(&token).unwrap();
    assert_eq!(claims.username, "alice");
}

#[tokio::test]
async fn test_modify_user_keeps_password_when_omitted() {
    let pool = memory_pool().await;
    create_user(&pool, "alice", "a@x.com").await;

    let users = UserRepository::new(pool.clone());
    let stored = users
        .get_once("username", &FilterValue::Text("alice".into()))
        .await
        .unwrap();

    let usecase = ModifyUserUseCase::new(
        &users,
        GenericRequest::new(ModifyUser {
            id: stored.id.clone(),
            username: "alice".into(),
            name: "Alice".into(),
            last_name: "Doe".into(),
            password: String::new(),
            email: "a@x.com".into(),
            user_type: UserType::Normal,
        }),
    );
    usecase.validate().await.unwrap();
    let data = usecase.execute().await.unwrap();
    assert_eq!(data.name, "Alice");

    // login still works with the original password
    let crypto = Argon2Cryptography::new();
    let login = LoginUserUseCase::new(
        &users,
        &crypto,
        GenericRequest::new(LoginUser {
            username: "alice".into(),
            password: "secret123".into(),
        }),
    );
    login.validate().await.unwrap();
}

#[tokio::test]
async fn test_modify_unknown_user_fails() {
    let pool = memory_pool().await;
    let users = UserRepository::new(pool.clone());

    let usecase = ModifyUserUseCase::new(
        &users,
        GenericRequest::new(ModifyUser {
            id: "no-such-id".into(),
            username: "ghost".into(),
            name: "Ghost".into(),
            last_name: "User".into(),
            password: String::new(),
            email: "g@x.com".into(),
            user_type: UserType::Normal,
        }),
    );
    let err = usecase.validate().await.unwrap_err();
    assert_eq!(err.message, "user does not exist");
}

#[tokio::test]
async fn test_list_departments_second_page() {
    let pool = memory_pool().await;
    let departments = DepartmentRepository::new(pool.clone());
    for i in 1..=25 {
        departments
            .create(&Department {
                id: String::new(),
                name: format!("Dept {i:02}"),
            })
            .await
            .unwrap();
    }

    let usecase = ListDepartmentUseCase::new(
        GenericRequest::new(SearchQuery::paginated(2, 10)),
        &departments,
    );
    usecase.validate().await.unwrap();
    let page = usecase.execute().await.unwrap();

    assert_eq!(page.total_rows, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.rows.first().map(|d| d.name.as_str()), Some("Dept 11"));
    assert_eq!(page.rows.last().map(|d| d.name.as_str()), Some("Dept 20"));
}

#[tokio::test]
async fn test_list_departments_rejects_unknown_filter_field() {
    let pool = memory_pool().await;
    let departments = DepartmentRepository::new(pool.clone());

    let query = SearchQuery {
        filters: vec![Filter::new("salary", "high")].into(),
        pagination: Default::default(),
    };
    let usecase = ListDepartmentUseCase::new(GenericRequest::new(query), &departments);
    let err = usecase.validate().await.unwrap_err();
    assert_eq!(err.message, "field not found: salary");
}

#[tokio::test]
async fn test_delete_missing_department_runs_no_delete() {
    let pool = memory_pool().await;
    let departments = DepartmentRepository::new(pool.clone());
    departments
        .create(&Department {
            id: String::new(),
            name: "Engineering".into(),
        })
        .await
        .unwrap();

    let usecase = DeleteDepartmentUseCase::new(
        &departments,
        GenericRequest::new(Filter::new("id", "no-such-id")),
    );
    let err = usecase.validate().await.unwrap_err();
    assert!(err.message.contains("not found"));

    // nothing was deleted
    let live: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM departments WHERE deleted_at IS NULL")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(live, 1);
}

#[tokio::test]
async fn test_delete_department_requires_id_key() {
    let pool = memory_pool().await;
    let departments = DepartmentRepository::new(pool.clone());

    let usecase = DeleteDepartmentUseCase::new(
        &departments,
        GenericRequest::new(Filter::new("name", "Engineering")),
    );
    let err = usecase.validate().await.unwrap_err();
    assert_eq!(err.message, "Key must be id");
}

#[tokio::test]
async fn test_create_position_validations() {
    let pool = memory_pool().await;
    let positions = PositionRepository::new(pool.clone());

    let payload = shared::models::CreatePosition {
        title: "Backend Engineer".into(),
        code: "BE-01".into(),
        description: String::new(),
        required_skills: String::new(),
        salary_min: 0.0,
        salary_max: 0.0,
        currency: String::new(),
        work_type: Default::default(),
        max_employees: 0,
        department_id: "d-1".into(),
        status: Default::default(),
        created_by: String::new(),
    };
    let usecase = CreatePositionUseCase::new(GenericRequest::new(payload), &positions);
    let err = usecase.validate().await.unwrap_err();
    assert_eq!(err.message, "Max employees must be greater than 0");
}
