//! Auth and user API module

mod handler;

use axum::routing::{get, post};
use axum::Router;

use crate::core::ServerState;

/// `/api/auth` - login is public, everything else requires a token
pub fn router() -> Router<ServerState> {
    Router::new().nest(
        "/api/auth",
        Router::new()
            .route("/login", post(handler::login))
            .route("/me", get(handler::me))
            .route("/list", get(handler::list))
            .route("/create", post(handler::create))
            .route("/modify", post(handler::modify))
            .route("/get", post(handler::get_by_field)),
    )
}
