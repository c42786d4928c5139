//! Shared types for the HRMS backend
//!
//! Common types used across the workspace: the system error model,
//! domain models, the filter/pagination query model and client-facing
//! request/response structures.

pub mod client;
pub mod error;
pub mod models;
pub mod query;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, ErrorCode, ErrorKind, Severity, SystemError, SystemResult};
pub use query::{
    FieldKind, FieldSchema, Filter, FilterValue, Filters, PaginatedResponse, Pagination,
    SearchQuery,
};
