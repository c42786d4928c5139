//! Filter and pagination query model
//!
//! List endpoints accept a [`SearchQuery`]: an ordered set of exact-match
//! filters plus pagination. Filters are validated against the target
//! entity's static field table ([`FieldSchema`]) before any SQL is built,
//! so only known columns with matching kinds ever reach the store.

use crate::error::SystemError;
use serde::{Deserialize, Serialize};

/// Declared kind of a filterable entity field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Bool,
}

/// Static table of an entity's filterable fields
///
/// One entry per column, with its declared kind. Filter validation is a
/// pure lookup against this table.
pub trait FieldSchema {
    const FIELDS: &'static [(&'static str, FieldKind)];

    /// Declared kind of a field, if the entity has it
    fn field_kind(key: &str) -> Option<FieldKind> {
        Self::FIELDS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, kind)| *kind)
    }
}

/// Filter value, deserialized from the JSON value as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

impl FilterValue {
    /// Runtime kind of this value; `None` for null
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            Self::Bool(_) => Some(FieldKind::Bool),
            Self::Integer(_) => Some(FieldKind::Integer),
            Self::Float(_) => Some(FieldKind::Float),
            Self::Text(_) => Some(FieldKind::Text),
            Self::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Exact-match filter on a single entity field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub key: String,
    pub value: FilterValue,
}

impl Filter {
    pub fn new(key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Validate this filter against the target entity's field table
    pub fn validate<T: FieldSchema>(&self) -> Result<(), SystemError> {
        if self.key.is_empty() {
            return Err(SystemError::validation("key is empty"));
        }
        let Some(value_kind) = self.value.kind() else {
            return Err(SystemError::validation("value is empty"));
        };
        let Some(field_kind) = T::field_kind(&self.key) else {
            return Err(SystemError::validation(format!(
                "field not found: {}",
                self.key
            )));
        };
        if value_kind != field_kind {
            return Err(SystemError::validation(format!(
                "field type mismatch: {}",
                self.key
            )));
        }
        Ok(())
    }
}

/// Ordered filter set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters(pub Vec<Filter>);

impl Filters {
    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validate every filter against the target entity's field table
    ///
    /// An empty filter set validates trivially.
    pub fn validate<T: FieldSchema>(&self) -> Result<(), SystemError> {
        for filter in &self.0 {
            filter.validate::<T>()?;
        }
        Ok(())
    }
}

impl From<Vec<Filter>> for Filters {
    fn from(filters: Vec<Filter>) -> Self {
        Self(filters)
    }
}

/// Pagination parameters
///
/// Out-of-range values are normalized rather than rejected: `page <= 0`
/// reads as page 1 and `limit <= 0` falls back to 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub limit: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Effective row offset: 0 for page <= 0, else `(page - 1) * limit`
    pub fn offset(&self) -> i64 {
        if self.page <= 0 {
            return 0;
        }
        (self.page - 1) * self.limit()
    }

    /// Effective row limit: 10 when the requested limit is <= 0
    pub fn limit(&self) -> i64 {
        if self.limit <= 0 { 10 } else { self.limit }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

/// Filter set plus pagination, the input of every list operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub filters: Filters,
    #[serde(default)]
    pub pagination: Pagination,
}

impl SearchQuery {
    /// Query with no filters and the given pagination
    pub fn paginated(page: i64, limit: i64) -> Self {
        Self {
            filters: Filters::default(),
            pagination: Pagination::new(page, limit),
        }
    }
}

/// One page of results plus the totals needed to render a pager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub total_rows: i64,
    pub total_pages: i64,
    pub rows: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// Build a page; `total_pages = ceil(total_rows / limit)`, 0 when
    /// the limit is not positive
    pub fn new(total_rows: i64, limit: i64, rows: Vec<T>) -> Self {
        let total_pages = if limit > 0 {
            (total_rows + limit - 1) / limit
        } else {
            0
        };
        Self {
            total_rows,
            total_pages,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    impl FieldSchema for Sample {
        const FIELDS: &'static [(&'static str, FieldKind)] = &[
            ("name", FieldKind::Text),
            ("count", FieldKind::Integer),
            ("ratio", FieldKind::Float),
            ("active", FieldKind::Bool),
        ];
    }

    #[test]
    fn test_filter_validate_ok() {
        assert!(Filter::new("name", "hr").validate::<Sample>().is_ok());
        assert!(
            Filter {
                key: "count".into(),
                value: FilterValue::Integer(3),
            }
            .validate::<Sample>()
            .is_ok()
        );
        assert!(
            Filter {
                key: "active".into(),
                value: FilterValue::Bool(true),
            }
            .validate::<Sample>()
            .is_ok()
        );
    }

    #[test]
    fn test_filter_validate_empty_key() {
        let err = Filter::new("", "x").validate::<Sample>().unwrap_err();
        assert_eq!(err.message, "key is empty");
    }

    #[test]
    fn test_filter_validate_null_value() {
        let filter = Filter {
            key: "name".into(),
            value: FilterValue::Null,
        };
        let err = filter.validate::<Sample>().unwrap_err();
        assert_eq!(err.message, "value is empty");
    }

    #[test]
    fn test_filter_validate_unknown_field() {
        let err = Filter::new("salary", "x").validate::<Sample>().unwrap_err();
        assert_eq!(err.message, "field not found: salary");
    }

    #[test]
    fn test_filter_validate_kind_mismatch() {
        let filter = Filter {
            key: "name".into(),
            value: FilterValue::Integer(1),
        };
        let err = filter.validate::<Sample>().unwrap_err();
        assert_eq!(err.message, "field type mismatch: name");
    }

    #[test]
    fn test_filters_validate_empty_set_is_ok() {
        assert!(Filters::default().validate::<Sample>().is_ok());
    }

    #[test]
    fn test_filters_validate_stops_on_first_failure() {
        let filters = Filters(vec![
            Filter::new("name", "hr"),
            Filter::new("missing", "x"),
            Filter::new("", "y"),
        ]);
        let err = filters.validate::<Sample>().unwrap_err();
        assert_eq!(err.message, "field not found: missing");
    }

    #[test]
    fn test_filter_value_deserialize() {
        let value: FilterValue = serde_json::from_str("true").unwrap();
        assert_eq!(value, FilterValue::Bool(true));
        let value: FilterValue = serde_json::from_str("7").unwrap();
        assert_eq!(value, FilterValue::Integer(7));
        let value: FilterValue = serde_json::from_str("7.5").unwrap();
        assert_eq!(value, FilterValue::Float(7.5));
        let value: FilterValue = serde_json::from_str("\"hr\"").unwrap();
        assert_eq!(value, FilterValue::Text("hr".into()));
        let value: FilterValue = serde_json::from_str("null").unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_pagination_offset() {
        assert_eq!(Pagination::new(0, 10).offset(), 0);
        assert_eq!(Pagination::new(-3, 10).offset(), 0);
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(2, 10).offset(), 10);
        assert_eq!(Pagination::new(4, 25).offset(), 75);
    }

    #[test]
    fn test_pagination_limit_defaults() {
        assert_eq!(Pagination::new(1, 0).limit(), 10);
        assert_eq!(Pagination::new(1, -5).limit(), 10);
        assert_eq!(Pagination::new(1, 25).limit(), 25);
        // offset honours the defaulted limit
        assert_eq!(Pagination::new(3, 0).offset(), 20);
    }

    #[test]
    fn test_paginated_response_total_pages() {
        let page = PaginatedResponse::<i32>::new(25, 10, vec![]);
        assert_eq!(page.total_pages, 3);
        let page = PaginatedResponse::<i32>::new(30, 10, vec![]);
        assert_eq!(page.total_pages, 3);
        let page = PaginatedResponse::<i32>::new(0, 10, vec![]);
        assert_eq!(page.total_pages, 0);
        let page = PaginatedResponse::<i32>::new(25, 0, vec![]);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_search_query_wire_shape() {
        let json = r#"{
            "filters": [{"key": "name", "value": "HR"}],
            "pagination": {"page": 2, "limit": 10}
        }"#;
        let query: SearchQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.filters.0.len(), 1);
        assert_eq!(query.pagination.offset(), 10);

        // empty body defaults
        let query: SearchQuery = serde_json::from_str("{}").unwrap();
        assert!(query.filters.is_empty());
    }
}
