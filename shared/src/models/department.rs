//! Department model

use crate::query::{FieldKind, FieldSchema};
use serde::{Deserialize, Serialize};

/// Department entity; `name` is unique
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

impl FieldSchema for Department {
    const FIELDS: &'static [(&'static str, FieldKind)] =
        &[("id", FieldKind::Text), ("name", FieldKind::Text)];
}
