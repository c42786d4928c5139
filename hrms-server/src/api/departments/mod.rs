//! Department API module

mod handler;

use axum::Router;
use axum::routing::post;

use crate::core::ServerState;

/// `/api/department` - auth required on every action
pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/department",
        Router::new()
            .route("/create", post(handler::create))
            .route("/update", post(handler::update))
            .route("/delete", post(handler::delete))
            .route("/get", post(handler::get))
            .route("/get-all", post(handler::get_all)),
    )
}
