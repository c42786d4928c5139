//! Position model

use super::Department;
use crate::query::{FieldKind, FieldSchema};
use serde::{Deserialize, Serialize};

/// Work arrangement of a position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    Remote,
    Hybrid,
    #[default]
    Onsite,
}

impl WorkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Hybrid => "hybrid",
            Self::Onsite => "onsite",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "remote" => Self::Remote,
            "hybrid" => Self::Hybrid,
            _ => Self::Onsite,
        }
    }
}

/// Lifecycle status of a position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    #[default]
    Active,
    Inactive,
    Closed,
}

impl PositionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Closed => "closed",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "inactive" => Self::Inactive,
            "closed" => Self::Closed,
            _ => Self::Active,
        }
    }
}

/// Position entity; `code` is unique
///
/// `department` is populated only when the row is fetched with an eager
/// join; the generic path leaves it `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub title: String,
    pub code: String,
    pub description: String,
    pub required_skills: String,
    pub salary_min: f64,
    pub salary_max: f64,
    pub currency: String,
    pub work_type: WorkType,
    pub max_employees: i64,
    pub department_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    pub status: PositionStatus,
    pub created_by: String,
    pub updated_by: String,
}

impl FieldSchema for Position {
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("id", FieldKind::Text),
        ("title", FieldKind::Text),
        ("code", FieldKind::Text),
        ("description", FieldKind::Text),
        ("required_skills", FieldKind::Text),
        ("salary_min", FieldKind::Float),
        ("salary_max", FieldKind::Float),
        ("currency", FieldKind::Text),
        ("work_type", FieldKind::Text),
        ("max_employees", FieldKind::Integer),
        ("department_id", FieldKind::Text),
        ("status", FieldKind::Text),
    ];
}

/// Create position payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePosition {
    pub title: String,
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: String,
    #[serde(default)]
    pub salary_min: f64,
    #[serde(default)]
    pub salary_max: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub work_type: WorkType,
    pub max_employees: i64,
    pub department_id: String,
    #[serde(default)]
    pub status: PositionStatus,
    #[serde(default)]
    pub created_by: String,
}

impl CreatePosition {
    pub fn into_position(self) -> Position {
        Position {
            id: String::new(),
            title: self.title,
            code: self.code,
            description: self.description,
            required_skills: self.required_skills,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            currency: self.currency,
            work_type: self.work_type,
            max_employees: self.max_employees,
            department_id: self.department_id,
            department: None,
            status: self.status,
            created_by: self.created_by.clone(),
            updated_by: self.created_by,
        }
    }
}

/// Update position payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifyPosition {
    pub id: String,
    pub title: String,
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: String,
    #[serde(default)]
    pub salary_min: f64,
    #[serde(default)]
    pub salary_max: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub work_type: WorkType,
    #[serde(default)]
    pub max_employees: i64,
    pub department_id: String,
    #[serde(default)]
    pub status: PositionStatus,
    #[serde(default)]
    pub updated_by: String,
}

impl ModifyPosition {
    pub fn into_position(self) -> Position {
        Position {
            id: self.id,
            title: self.title,
            code: self.code,
            description: self.description,
            required_skills: self.required_skills,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            currency: self.currency,
            work_type: self.work_type,
            max_employees: self.max_employees,
            department_id: self.department_id,
            department: None,
            status: self.status,
            created_by: String::new(),
            updated_by: self.updated_by,
        }
    }
}
