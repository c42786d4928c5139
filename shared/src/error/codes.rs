//! Error codes, kinds and severities

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric error code carried by every [`super::SystemError`]
///
/// Codes double as the HTTP status the boundary renders, which keeps the
/// code-to-status mapping a pure lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    /// Sentinel meaning "no error", used where the error model is
    /// returned by value rather than by reference
    None = 0,
    /// Caller/input problem
    Validation = 400,
    /// Missing or invalid bearer token
    Unauthorized = 401,
    /// Schema bootstrap failure
    Migration = 404,
    /// Persistence or unexpected problem
    Internal = 500,
}

impl ErrorCode {
    /// Numeric value of this code
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// HTTP status the boundary renders for this code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::None => StatusCode::OK,
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Migration => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            400 => Ok(Self::Validation),
            401 => Ok(Self::Unauthorized),
            404 => Ok(Self::Migration),
            500 => Ok(Self::Internal),
            other => Err(format!("unknown error code: {other}")),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Internal,
    Validation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal => write!(f, "internal"),
            Self::Validation => write!(f, "validation"),
        }
    }
}

/// Informational severity; never drives control flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}
