//! Repository tests against in-memory SQLite

use std::str::FromStr;

use shared::models::{Department, Permission, Role, User, UserType};
use shared::query::{Filter, FilterValue, Filters, SearchQuery};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::contracts::{ReadOperation, RoleContract, WriteOperation};
use crate::db::repository::{DepartmentRepository, RoleRepository, UserRepository};

async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .pragma("foreign_keys", "ON");
    // A single connection keeps every query on the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

fn text(value: &str) -> FilterValue {
    FilterValue::Text(value.to_string())
}

fn sample_user(username: &str, email: &str) -> User {
    User {
        id: String::new(),
        username: username.into(),
        name: "Sample".into(),
        last_name: "User".into(),
        password: "hashed-password".into(),
        email: email.into(),
        user_type: UserType::Normal,
        active: true,
        picture: String::new(),
        role: String::new(),
    }
}

#[tokio::test]
async fn test_create_assigns_identity_and_round_trips() {
    let repo = DepartmentRepository::new(memory_pool().await);

    let created = repo
        .create(&Department {
            id: String::new(),
            name: "Engineering".into(),
        })
        .await
        .unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Engineering");

    let fetched = repo.get_once("id", &text(&created.id)).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_once_fails_flat_on_missing_row() {
    let repo = DepartmentRepository::new(memory_pool().await);
    let err = repo.get_once("id", &text("no-such-id")).await.unwrap_err();
    assert_eq!(err.message, "GetOnce failed");
}

#[tokio::test]
async fn test_exists_distinguishes_absence_from_error() {
    let repo = DepartmentRepository::new(memory_pool().await);

    assert!(!repo.exists("name", &text("HR")).await.unwrap());
    repo.create(&Department {
        id: String::new(),
        name: "HR".into(),
    })
    .await
    .unwrap();
    assert!(repo.exists("name", &text("HR")).await.unwrap());
}

#[tokio::test]
async fn test_filter_key_outside_schema_is_rejected() {
    let repo = DepartmentRepository::new(memory_pool().await);
    let err = repo
        .get_once("name; DROP TABLE departments", &text("x"))
        .await
        .unwrap_err();
    assert!(err.message.starts_with("field not found"));
}

#[tokio::test]
async fn test_update_saves_fields() {
    let repo = DepartmentRepository::new(memory_pool().await);
    let created = repo
        .create(&Department {
            id: String::new(),
            name: "Ops".into(),
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            &created.id,
            &Department {
                id: created.id.clone(),
                name: "Operations".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Operations");
}

#[tokio::test]
async fn test_delete_is_soft() {
    let pool = memory_pool().await;
    let repo = DepartmentRepository::new(pool.clone());
    let created = repo
        .create(&Department {
            id: String::new(),
            name: "Legal".into(),
        })
        .await
        .unwrap();

    repo.delete(&created.id).await.unwrap();

    assert!(!repo.exists("id", &text(&created.id)).await.unwrap());
    assert!(repo.get_once("id", &text(&created.id)).await.is_err());

    // the row itself is still there, only marked
    let raw: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM departments WHERE id = ?")
        .bind(&created.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(raw, 1);
}

#[tokio::test]
async fn test_pagination_over_25_rows() {
    let repo = DepartmentRepository::new(memory_pool().await);
    for i in 1..=25 {
        repo.create(&Department {
            id: String::new(),
            name: format!("Dept {i:02}"),
        })
        .await
        .unwrap();
    }

    let page = repo
        .get_by_filter(&SearchQuery::paginated(2, 10))
        .await
        .unwrap();

    assert_eq!(page.total_rows, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.rows.len(), 10);
    let names: Vec<&str> = page.rows.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names.first(), Some(&"Dept 11"));
    assert_eq!(names.last(), Some(&"Dept 20"));
}

#[tokio::test]
async fn test_get_by_filter_applies_conjunctions() {
    let repo = UserRepository::new(memory_pool().await);
    repo.create(&sample_user("alice", "alice@x.com")).await.unwrap();
    repo.create(&sample_user("bob", "bob@x.com")).await.unwrap();

    let query = SearchQuery {
        filters: Filters(vec![
            Filter::new("username", "alice"),
            Filter {
                key: "active".into(),
                value: FilterValue::Bool(true),
            },
        ]),
        pagination: Default::default(),
    };
    let page = repo.get_by_filter(&query).await.unwrap();
    assert_eq!(page.total_rows, 1);
    assert_eq!(page.rows[0].username, "alice");
}

#[tokio::test]
async fn test_user_update_preserves_password_when_empty() {
    let repo = UserRepository::new(memory_pool().await);
    let created = repo.create(&sample_user("alice", "alice@x.com")).await.unwrap();

    let mut change = created.clone();
    change.password = String::new();
    change.name = "Alicia".into();
    let updated = repo.update(&created.id, &change).await.unwrap();

    assert_eq!(updated.name, "Alicia");
    assert_eq!(updated.password, "hashed-password");

    let mut change = updated.clone();
    change.password = "new-hash".into();
    let updated = repo.update(&created.id, &change).await.unwrap();
    assert_eq!(updated.password, "new-hash");
}

#[tokio::test]
async fn test_role_create_links_permissions() {
    let repo = RoleRepository::new(memory_pool().await);

    let role = repo
        .create(&Role {
            id: String::new(),
            name: "Viewer".into(),
            description: "read only".into(),
            permissions: vec![
                Permission {
                    name: "view_users".into(),
                    ..Default::default()
                },
                Permission {
                    name: "view_roles".into(),
                    ..Default::default()
                },
            ],
        })
        .await
        .unwrap();

    assert_eq!(role.permissions.len(), 2);
    assert!(role.permissions.iter().all(|p| p.role_id == role.id));

    let fetched = repo.get_once("name", &text("Viewer")).await.unwrap();
    assert_eq!(fetched.permissions.len(), 2);
}

#[tokio::test]
async fn test_role_update_replaces_association_set() {
    let repo = RoleRepository::new(memory_pool().await);
    let role = repo
        .create(&Role {
            id: String::new(),
            name: "Viewer".into(),
            description: "read only".into(),
            permissions: vec![Permission {
                name: "view_users".into(),
                ..Default::default()
            }],
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            &role.id,
            &Role {
                id: role.id.clone(),
                name: "Viewer".into(),
                description: "read only, v2".into(),
                permissions: vec![
                    Permission {
                        name: "view_roles".into(),
                        ..Default::default()
                    },
                    Permission {
                        name: "view_menu_dashboard".into(),
                        ..Default::default()
                    },
                ],
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.description, "read only, v2");
    let names: Vec<&str> = updated.permissions.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["view_roles", "view_menu_dashboard"]);

    let perms = repo.get_permissions(&role.id).await.unwrap();
    assert_eq!(perms.len(), 2);
}

#[tokio::test]
async fn test_get_permissions_for_missing_role() {
    let repo = RoleRepository::new(memory_pool().await);
    let err = repo.get_permissions("no-such-role").await.unwrap_err();
    assert_eq!(err.message, "Role not found");
}
