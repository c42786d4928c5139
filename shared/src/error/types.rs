//! Error type and API response envelope

use super::codes::{ErrorCode, ErrorKind, Severity};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// System error carried as a value through every layer
///
/// Renders as `[severity] kind: message`.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("[{severity}] {kind}: {message}")]
pub struct SystemError {
    /// Numeric code, maps to the HTTP status
    pub code: ErrorCode,
    /// Classification: validation (caller) vs internal (system)
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    /// Informational severity
    #[serde(rename = "level")]
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Optional structured details (field-level context, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl SystemError {
    /// Create an error from its parts
    pub fn new(
        code: ErrorCode,
        kind: ErrorKind,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            kind,
            severity,
            message: message.into(),
            details: None,
        }
    }

    /// Attach structured details to this error
    pub fn with_details(mut self, details: impl Into<Value>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// HTTP status the boundary renders for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error (caller/input problem, 400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::Validation,
            ErrorKind::Validation,
            Severity::Error,
            message,
        )
    }

    /// Create an internal error (persistence/unexpected problem, 500)
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::Internal,
            ErrorKind::Internal,
            Severity::Error,
            message,
        )
    }

    /// Create an unauthorized error (missing/invalid bearer token, 401)
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::Unauthorized,
            ErrorKind::Validation,
            Severity::Warning,
            message,
        )
    }

    /// Create a migration error (schema bootstrap failure)
    pub fn migration(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::Migration,
            ErrorKind::Validation,
            Severity::Error,
            message,
        )
    }
}

/// Unified API response envelope
///
/// - `code`: numeric error code (0 for success)
/// - `message`: human-readable message
/// - `data`: response payload (on success)
/// - `details`: additional error details (on failure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create a success response without data
    pub fn ok() -> Self {
        Self {
            code: 0,
            message: "OK".to_string(),
            data: None,
            details: None,
        }
    }

    /// Create an error response from a [`SystemError`]
    pub fn error(err: &SystemError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

/// Result type for operations returning a [`SystemError`]
pub type SystemResult<T> = Result<T, SystemError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for SystemError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        if matches!(self.kind, ErrorKind::Internal) {
            tracing::error!(code = %self.code, message = %self.message, "System error occurred");
        }
        let body = ApiResponse::<()>::error(&self);

        (status, Json(body)).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = if self.code == 0 {
            StatusCode::OK
        } else {
            ErrorCode::try_from(self.code)
                .map(|c| c.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        };

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_error_display() {
        let err = SystemError::validation("username is required");
        assert_eq!(format!("{err}"), "[error] validation: username is required");

        let err = SystemError::internal("connection lost");
        assert_eq!(format!("{err}"), "[error] internal: connection lost");
    }

    #[test]
    fn test_system_error_http_status() {
        assert_eq!(
            SystemError::validation("bad").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SystemError::internal("boom").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            SystemError::migration("no schema").http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_system_error_with_details() {
        let err = SystemError::validation("field not found")
            .with_details(serde_json::json!({"field": "username"}));
        assert_eq!(err.details.unwrap()["field"], "username");
    }

    #[test]
    fn test_error_code_round_trip() {
        for code in [
            ErrorCode::None,
            ErrorCode::Validation,
            ErrorCode::Unauthorized,
            ErrorCode::Migration,
            ErrorCode::Internal,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()).unwrap(), code);
        }
        assert!(ErrorCode::try_from(418).is_err());
    }

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(42);
        assert_eq!(response.code, 0);
        assert_eq!(response.message, "OK");
        assert_eq!(response.data, Some(42));
    }

    #[test]
    fn test_api_response_error() {
        let err = SystemError::validation("user already exists");
        let response = ApiResponse::<()>::error(&err);
        assert_eq!(response.code, 400);
        assert_eq!(response.message, "user already exists");
        assert!(response.data.is_none());
    }

    #[test]
    fn test_api_response_serialize() {
        let response = ApiResponse::success("hello");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"code\":0"));
        assert!(json.contains("\"data\":\"hello\""));
    }
}
