//! Permission model

use crate::query::{FieldKind, FieldSchema};
use serde::{Deserialize, Serialize};

/// Permission entity; belongs to exactly one role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub role_id: String,
}

impl FieldSchema for Permission {
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("id", FieldKind::Text),
        ("name", FieldKind::Text),
        ("description", FieldKind::Text),
        ("role_id", FieldKind::Text),
    ];
}

/// Fixed catalog of well-known permission keys, seeded at bootstrap
pub const PERMISSION_CATALOG: &[(&str, &str)] = &[
    ("view_menu_dashboard", "View the dashboard menu"),
    ("view_menu_employees", "View the employees menu"),
    ("edit_employees", "Edit employee records"),
    ("view_employees", "View employee records"),
    ("view_menu_departments", "View the departments menu"),
    ("view_menu_position", "View the positions menu"),
    ("view_menu_attendance", "View the attendance menu"),
    ("view_menu_payroll", "View the payroll menu"),
    ("view_menu_leave_requests", "View the leave requests menu"),
    ("view_menu_settings", "View the settings menu"),
    ("all_access", "Unrestricted access"),
    ("view_roles", "View roles"),
    ("edit_roles", "Edit roles"),
    ("edit_users", "Edit users"),
    ("view_users", "View users"),
];
