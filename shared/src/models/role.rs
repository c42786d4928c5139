//! Role model

use super::Permission;
use crate::query::{FieldKind, FieldSchema};
use serde::{Deserialize, Serialize};

/// Role entity; owns its permission rows (one role, many permissions)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Role {
    /// Compact listing shape: id, name and the permission names only
    pub fn to_role_item(&self) -> RoleItem {
        RoleItem {
            id: self.id.clone(),
            name: self.name.clone(),
            permissions: self
                .permissions
                .iter()
                .map(|p| p.name.clone())
                .collect(),
        }
    }
}

impl FieldSchema for Role {
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("id", FieldKind::Text),
        ("name", FieldKind::Text),
        ("description", FieldKind::Text),
    ];
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRole {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl CreateRole {
    pub fn into_role(self) -> Role {
        Role {
            id: String::new(),
            name: self.name,
            description: self.description,
            permissions: self.permissions,
        }
    }
}

/// Role listing item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleItem {
    pub id: String,
    pub name: String,
    pub permissions: Vec<String>,
}
