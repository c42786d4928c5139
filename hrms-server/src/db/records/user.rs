//! User storage record

use chrono::NaiveDateTime;
use shared::models::{User, UserType};

use super::{SqlValue, StorageRecord, epoch};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub name: String,
    pub last_name: String,
    pub password: String,
    pub email: String,
    pub user_type: String,
    pub active: bool,
    pub picture: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl StorageRecord for UserRecord {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &[
        "username",
        "name",
        "last_name",
        "password",
        "email",
        "user_type",
        "active",
        "picture",
        "role",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.username.clone()),
            SqlValue::Text(self.name.clone()),
            SqlValue::Text(self.last_name.clone()),
            SqlValue::Text(self.password.clone()),
            SqlValue::Text(self.email.clone()),
            SqlValue::Text(self.user_type.clone()),
            SqlValue::Bool(self.active),
            SqlValue::Text(self.picture.clone()),
            SqlValue::Text(self.role.clone()),
        ]
    }
}

pub fn user_to_record(user: &User) -> UserRecord {
    UserRecord {
        id: user.id.clone(),
        username: user.username.clone(),
        name: user.name.clone(),
        last_name: user.last_name.clone(),
        password: user.password.clone(),
        email: user.email.clone(),
        user_type: user.user_type.as_str().to_string(),
        active: user.active,
        picture: user.picture.clone(),
        role: user.role.clone(),
        created_at: epoch(),
        updated_at: epoch(),
        deleted_at: None,
    }
}

pub fn user_to_entity(record: UserRecord) -> User {
    User {
        id: record.id,
        username: record.username,
        name: record.name,
        last_name: record.last_name,
        password: record.password,
        email: record.email,
        user_type: UserType::parse(&record.user_type),
        active: record.active,
        picture: record.picture,
        role: record.role,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_mapped_attributes() {
        let user = User {
            id: "u-1".into(),
            username: "alice".into(),
            name: "Alice".into(),
            last_name: "Doe".into(),
            password: "$argon2id$hash".into(),
            email: "a@x.com".into(),
            user_type: UserType::Admin,
            active: true,
            picture: "alice.png".into(),
            role: "r-1".into(),
        };
        assert_eq!(user_to_entity(user_to_record(&user)), user);
    }
}
