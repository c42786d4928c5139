//! Auth and user API handlers

use axum::body::Bytes;
use axum::extract::State;
use axum::{Extension, Json};

use shared::client::{FieldRequest, LoginResponse};
use shared::error::SystemError;
use shared::models::{CreateUser, LoginUser, ModifyUser, UserData};
use shared::query::{Filter, FilterValue, PaginatedResponse};

use crate::api::search_query_or_default;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::usecases::GenericRequest;
use crate::usecases::users::{
    CreateUserUseCase, GetUserByFieldUseCase, ListUserUseCase, LoginUserUseCase,
    ModifyUserUseCase,
};

/// POST /api/auth/login - authenticate and issue a token
pub async fn login(
    State(state): State<ServerState>,
    Json(body): Json<LoginUser>,
) -> Result<Json<LoginResponse>, SystemError> {
    let username = body.username.clone();

    let usecase =
        LoginUserUseCase::new(&state.users, &state.cryptography, GenericRequest::new(body));
    usecase.validate().await.inspect_err(|_| {
        tracing::warn!(username = %username, "Login failed");
    })?;
    let user = usecase.execute().await?;

    let token = state
        .jwt_service
        .generate_token(&user)
        .map_err(|e| SystemError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(username = %user.username, "User logged in");
    Ok(Json(LoginResponse { token, user }))
}

/// GET /api/auth/me - current token's user
pub async fn me(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<UserData>, SystemError> {
    let filter = Filter::new("username", current_user.username.as_str());
    let usecase = GetUserByFieldUseCase::new(&state.users, GenericRequest::new(filter));
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}

/// GET /api/auth/list - list users (public projections)
pub async fn list(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<PaginatedResponse<UserData>>, SystemError> {
    let query = search_query_or_default(&body)?;
    let usecase = ListUserUseCase::new(&state.users, GenericRequest::new(query));
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}

/// POST /api/auth - create a user
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(body): Json<CreateUser>,
) -> Result<Json<UserData>, SystemError> {
    tracing::info!(
        operator = %current_user.username,
        username = %body.username,
        "Creating user"
    );

    let usecase =
        CreateUserUseCase::new(&state.users, &state.cryptography, GenericRequest::new(body));
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}

/// POST /api/auth/modify - update a user
pub async fn modify(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(body): Json<ModifyUser>,
) -> Result<Json<UserData>, SystemError> {
    tracing::info!(
        operator = %current_user.username,
        user_id = %body.id,
        "Modifying user"
    );

    let usecase = ModifyUserUseCase::new(&state.users, GenericRequest::new(body));
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}

/// POST /api/auth/get - fetch a user by username, email or id
pub async fn get_by_field(
    State(state): State<ServerState>,
    Json(body): Json<FieldRequest>,
) -> Result<Json<UserData>, SystemError> {
    let filter = Filter {
        key: body.key,
        value: FilterValue::Text(body.value),
    };
    let usecase = GetUserByFieldUseCase::new(&state.users, GenericRequest::new(filter));
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}
