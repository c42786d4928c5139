//! Role API module

mod handler;

use axum::Router;
use axum::routing::{get, post};

use crate::core::ServerState;

/// `/api/roles` - auth required on every action
pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/roles",
        Router::new()
            .route("/create", post(handler::create))
            .route("/update", post(handler::update))
            .route("/delete", post(handler::delete))
            .route("/get", post(handler::get))
            .route("/get-all", post(handler::get_all))
            .route("/get-permissions/{role_id}", get(handler::get_permissions))
            .route("/system-permissions", get(handler::system_permissions)),
    )
}
