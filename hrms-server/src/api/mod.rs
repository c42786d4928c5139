//! API route module
//!
//! # Structure
//!
//! - [`auth`] - login and user management endpoints
//! - [`departments`] - department CRUD endpoints
//! - [`positions`] - position CRUD endpoints
//! - [`roles`] - role and permission endpoints
//!
//! Every `/api/` route except login sits behind the JWT middleware.

pub mod auth;
pub mod departments;
pub mod positions;
pub mod roles;

use axum::body::Bytes;
use axum::routing::get;
use axum::{Json, Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use shared::error::SystemError;
use shared::query::SearchQuery;

use crate::auth::require_auth;
use crate::core::ServerState;

/// Assemble the full application router
pub fn router(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .merge(auth::router())
        .merge(departments::router())
        .merge(positions::router())
        .merge(roles::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.request_timeout()))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Parse an optional `get-all` body; an empty body reads the first 100
/// rows, matching the historical default
pub(crate) fn search_query_or_default(bytes: &Bytes) -> Result<SearchQuery, SystemError> {
    if bytes.is_empty() {
        return Ok(SearchQuery::paginated(1, 100));
    }
    serde_json::from_slice(bytes).map_err(|_| SystemError::validation("Invalid request body"))
}
