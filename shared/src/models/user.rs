//! User model

use crate::error::SystemError;
use crate::query::{FieldKind, FieldSchema};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User account type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    #[default]
    Normal,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Normal => write!(f, "normal"),
        }
    }
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Normal => "normal",
        }
    }

    /// Parse from the stored column value; unknown values read as normal
    pub fn parse(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            _ => Self::Normal,
        }
    }
}

/// User entity; `password` holds the hash at rest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub last_name: String,
    pub password: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub active: bool,
    pub picture: String,
    pub role: String,
}

impl User {
    /// Public projection of this user; never carries the password
    pub fn to_user_data(&self) -> UserData {
        UserData {
            id: self.id.clone(),
            username: self.username.clone(),
            name: self.name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            user_type: self.user_type,
            picture: self.picture.clone(),
            role: self.role.clone(),
            active: self.active,
        }
    }
}

impl FieldSchema for User {
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("id", FieldKind::Text),
        ("username", FieldKind::Text),
        ("name", FieldKind::Text),
        ("last_name", FieldKind::Text),
        ("email", FieldKind::Text),
        ("user_type", FieldKind::Text),
        ("active", FieldKind::Bool),
        ("picture", FieldKind::Text),
        ("role", FieldKind::Text),
    ];
}

/// Signup payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub picture: String,
}

impl CreateUser {
    /// New users start active
    pub fn into_user(self) -> User {
        User {
            id: String::new(),
            username: self.username,
            name: self.name,
            last_name: self.last_name,
            password: self.password,
            email: self.email,
            user_type: self.user_type,
            active: true,
            picture: self.picture,
            role: self.role,
        }
    }

    pub fn validate(&self) -> Result<(), SystemError> {
        if self.username.is_empty() {
            return Err(SystemError::validation("username is required"));
        }
        if self.password.is_empty() {
            return Err(SystemError::validation("password is required"));
        }
        if self.email.is_empty() {
            return Err(SystemError::validation("email is required"));
        }
        Ok(())
    }
}

/// Update payload; an empty `password` keeps the stored hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifyUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub password: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

impl ModifyUser {
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            username: self.username,
            name: self.name,
            last_name: self.last_name,
            password: self.password,
            email: self.email,
            user_type: self.user_type,
            ..User::default()
        }
    }

    pub fn validate(&self) -> Result<(), SystemError> {
        if self.id.is_empty() {
            return Err(SystemError::validation("id is required"));
        }
        if self.username.is_empty() {
            return Err(SystemError::validation("username is required"));
        }
        if self.email.is_empty() {
            return Err(SystemError::validation("email is required"));
        }
        if self.name.is_empty() {
            return Err(SystemError::validation("name is required"));
        }
        if self.last_name.is_empty() {
            return Err(SystemError::validation("last name is required"));
        }
        Ok(())
    }
}

/// Public user projection returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub picture: String,
    pub role: String,
    pub active: bool,
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUser {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_data_has_no_password() {
        let user = User {
            id: "u-1".into(),
            username: "alice".into(),
            password: "$argon2id$hash".into(),
            email: "a@x.com".into(),
            ..User::default()
        };
        let data = user.to_user_data();
        assert_eq!(data.username, "alice");
        let json = serde_json::to_string(&data).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn test_create_user_starts_active() {
        let payload = CreateUser {
            username: "alice".into(),
            password: "secret123".into(),
            email: "a@x.com".into(),
            role: String::new(),
            name: String::new(),
            last_name: String::new(),
            user_type: UserType::Normal,
            picture: String::new(),
        };
        let user = payload.into_user();
        assert!(user.active);
        assert!(user.id.is_empty());
    }

    #[test]
    fn test_create_user_validate() {
        let payload = CreateUser {
            username: String::new(),
            password: "x".into(),
            email: "a@x.com".into(),
            role: String::new(),
            name: String::new(),
            last_name: String::new(),
            user_type: UserType::Normal,
            picture: String::new(),
        };
        assert_eq!(
            payload.validate().unwrap_err().message,
            "username is required"
        );
    }

    #[test]
    fn test_user_type_wire_format() {
        assert_eq!(serde_json::to_string(&UserType::Admin).unwrap(), "\"admin\"");
        let t: UserType = serde_json::from_str("\"normal\"").unwrap();
        assert_eq!(t, UserType::Normal);
        assert_eq!(UserType::parse("admin"), UserType::Admin);
        assert_eq!(UserType::parse("whatever"), UserType::Normal);
    }
}
