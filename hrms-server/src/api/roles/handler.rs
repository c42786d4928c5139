//! Role API handlers

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::{Extension, Json};

use shared::client::{IdRequest, MessageResponse};
use shared::error::SystemError;
use shared::models::{CreateRole, Permission, Role, RoleItem};
use shared::query::{Filter, PaginatedResponse};

use crate::api::search_query_or_default;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::usecases::GenericRequest;
use crate::usecases::permissions::ListPermissionsUseCase;
use crate::usecases::roles::{
    CreateRoleUseCase, DeleteRoleUseCase, GetPermissionsUseCase, GetRoleUseCase, ListRoleUseCase,
    UpdateRoleUseCase,
};

/// POST /api/roles/create
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(body): Json<CreateRole>,
) -> Result<Json<RoleItem>, SystemError> {
    tracing::info!(
        operator = %current_user.username,
        role_name = %body.name,
        "Creating role"
    );

    let usecase = CreateRoleUseCase::new(&state.roles, GenericRequest::new(body));
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}

/// POST /api/roles/update
pub async fn update(
    State(state): State<ServerState>,
    Json(body): Json<Role>,
) -> Result<Json<Role>, SystemError> {
    let usecase = UpdateRoleUseCase::new(&state.roles, GenericRequest::new(body));
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}

/// POST /api/roles/delete
pub async fn delete(
    State(state): State<ServerState>,
    Json(body): Json<IdRequest>,
) -> Result<Json<MessageResponse>, SystemError> {
    let filter = Filter::new("id", body.id);
    let usecase = DeleteRoleUseCase::new(&state.roles, GenericRequest::new(filter));
    usecase.validate().await?;
    usecase.execute().await?;
    Ok(Json(MessageResponse::new("Role deleted")))
}

/// POST /api/roles/get
pub async fn get(
    State(state): State<ServerState>,
    Json(body): Json<IdRequest>,
) -> Result<Json<Role>, SystemError> {
    let filter = Filter::new("id", body.id);
    let usecase = GetRoleUseCase::new(&state.roles, GenericRequest::new(filter));
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}

/// POST /api/roles/get-all
pub async fn get_all(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<PaginatedResponse<Role>>, SystemError> {
    let query = search_query_or_default(&body)?;
    let usecase = ListRoleUseCase::new(GenericRequest::new(query), &state.roles);
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}

/// GET /api/roles/get-permissions/{role_id}
pub async fn get_permissions(
    State(state): State<ServerState>,
    Path(role_id): Path<String>,
) -> Result<Json<Vec<Permission>>, SystemError> {
    let usecase = GetPermissionsUseCase::new(&state.roles, role_id);
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}

/// GET /api/roles/system-permissions - the full seeded catalog
pub async fn system_permissions(
    State(state): State<ServerState>,
) -> Result<Json<Vec<Permission>>, SystemError> {
    let usecase = ListPermissionsUseCase::new(&state.permissions);
    Ok(Json(usecase.execute().await?))
}
