//! Authentication middleware
//!
//! Axum middleware that guards the `/api/` surface with JWT bearer auth.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use shared::error::SystemError;

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;

/// Authentication middleware - requires a valid bearer token
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`,
/// then injects [`CurrentUser`] into the request extensions.
///
/// # Paths that skip authentication
///
/// - `OPTIONS *` (CORS preflight)
/// - anything outside `/api/`
/// - `POST /api/auth/login`
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, SystemError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes fall through (health check, 404s)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if path == "/api/auth/login" {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| SystemError::unauthorized("Invalid authorization header"))?,
        None => {
            tracing::warn!(uri = %req.uri(), "Missing authentication token");
            return Err(SystemError::unauthorized("Authentication token required"));
        }
    };

    match state.jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(uri = %req.uri(), error = %e, "Authentication failed");
            Err(SystemError::unauthorized("Invalid or expired token"))
        }
    }
}
