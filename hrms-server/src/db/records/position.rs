//! Position storage record

use chrono::NaiveDateTime;
use shared::models::{Position, PositionStatus, WorkType};

use super::{SqlValue, StorageRecord, epoch};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PositionRecord {
    pub id: String,
    pub title: String,
    pub code: String,
    pub description: String,
    pub required_skills: String,
    pub salary_min: f64,
    pub salary_max: f64,
    pub currency: String,
    pub work_type: String,
    pub max_employees: i64,
    pub department_id: String,
    pub status: String,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl StorageRecord for PositionRecord {
    const TABLE: &'static str = "positions";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "code",
        "description",
        "required_skills",
        "salary_min",
        "salary_max",
        "currency",
        "work_type",
        "max_employees",
        "department_id",
        "status",
        "created_by",
        "updated_by",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.title.clone()),
            SqlValue::Text(self.code.clone()),
            SqlValue::Text(self.description.clone()),
            SqlValue::Text(self.required_skills.clone()),
            SqlValue::Real(self.salary_min),
            SqlValue::Real(self.salary_max),
            SqlValue::Text(self.currency.clone()),
            SqlValue::Text(self.work_type.clone()),
            SqlValue::Integer(self.max_employees),
            SqlValue::Text(self.department_id.clone()),
            SqlValue::Text(self.status.clone()),
            SqlValue::Text(self.created_by.clone()),
            SqlValue::Text(self.updated_by.clone()),
        ]
    }
}

pub fn position_to_record(position: &Position) -> PositionRecord {
    PositionRecord {
        id: position.id.clone(),
        title: position.title.clone(),
        code: position.code.clone(),
        description: position.description.clone(),
        required_skills: position.required_skills.clone(),
        salary_min: position.salary_min,
        salary_max: position.salary_max,
        currency: position.currency.clone(),
        work_type: position.work_type.as_str().to_string(),
        max_employees: position.max_employees,
        department_id: position.department_id.clone(),
        status: position.status.as_str().to_string(),
        created_by: position.created_by.clone(),
        updated_by: position.updated_by.clone(),
        created_at: epoch(),
        updated_at: epoch(),
        deleted_at: None,
    }
}

/// The department back-reference stays `None` here; only an eager join
/// populates it
pub fn position_to_entity(record: PositionRecord) -> Position {
    Position {
        id: record.id,
        title: record.title,
        code: record.code,
        description: record.description,
        required_skills: record.required_skills,
        salary_min: record.salary_min,
        salary_max: record.salary_max,
        currency: record.currency,
        work_type: WorkType::parse(&record.work_type),
        max_employees: record.max_employees,
        department_id: record.department_id,
        department: None,
        status: PositionStatus::parse(&record.status),
        created_by: record.created_by,
        updated_by: record.updated_by,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_mapped_attributes() {
        let position = Position {
            id: "p-1".into(),
            title: "Backend Engineer".into(),
            code: "BE-01".into(),
            description: "Builds the backend".into(),
            required_skills: "rust, sql".into(),
            salary_min: 50_000.0,
            salary_max: 80_000.0,
            currency: "EUR".into(),
            work_type: WorkType::Hybrid,
            max_employees: 3,
            department_id: "d-1".into(),
            department: None,
            status: PositionStatus::Active,
            created_by: "u-1".into(),
            updated_by: "u-1".into(),
        };
        assert_eq!(position_to_entity(position_to_record(&position)), position);
    }
}
