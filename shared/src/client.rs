//! Client-facing request/response DTOs

use crate::models::UserData;
use serde::{Deserialize, Serialize};

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserData,
}

/// Body of the `get`/`delete` actions that address a row by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdRequest {
    pub id: String,
}

/// Body of the user `get` action: field name plus value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRequest {
    pub key: String,
    pub value: String,
}

/// Plain message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
