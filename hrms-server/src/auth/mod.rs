//! JWT authentication

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, JwtService};
pub use middleware::require_auth;

use shared::models::UserType;

/// Authenticated caller, injected into request extensions by the auth
/// middleware
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub username: String,
    pub email: String,
    pub user_type: UserType,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            email: claims.email,
            user_type: UserType::parse(&claims.user_type),
        }
    }
}
