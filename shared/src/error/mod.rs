//! Unified error system for the HRMS backend
//!
//! This module provides the error model shared by every layer:
//! - [`ErrorCode`]: numeric error codes that map to HTTP statuses
//! - [`ErrorKind`]: classification of errors (validation vs internal)
//! - [`Severity`]: informational severity, never used for control flow
//! - [`SystemError`]: the error value returned by every fallible operation
//! - [`ApiResponse`]: unified API response envelope
//!
//! Errors are values, not panics: every fallible operation returns
//! `Result<T, SystemError>` and the HTTP boundary maps `ErrorCode` to a
//! status uniformly.
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiResponse, SystemError};
//!
//! let err = SystemError::validation("username is required");
//! assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
//!
//! let response = ApiResponse::<()>::error(&err);
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, ErrorKind, Severity};
pub use types::{ApiResponse, SystemError, SystemResult};
