//! Department API handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use shared::client::{IdRequest, MessageResponse};
use shared::error::SystemError;
use shared::models::Department;
use shared::query::{Filter, PaginatedResponse};

use crate::api::search_query_or_default;
use crate::core::ServerState;
use crate::usecases::GenericRequest;
use crate::usecases::department::{
    CreateDepartmentUseCase, DeleteDepartmentUseCase, GetDepartmentByIdUseCase,
    ListDepartmentUseCase, UpdateDepartmentUseCase,
};

/// POST /api/department/create
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<Department>,
) -> Result<Json<Department>, SystemError> {
    tracing::info!(name = %body.name, "Creating department");

    let usecase = CreateDepartmentUseCase::new(GenericRequest::new(body), &state.departments);
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}

/// POST /api/department/update
pub async fn update(
    State(state): State<ServerState>,
    Json(body): Json<Department>,
) -> Result<Json<Department>, SystemError> {
    let usecase = UpdateDepartmentUseCase::new(GenericRequest::new(body), &state.departments);
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}

/// POST /api/department/delete
pub async fn delete(
    State(state): State<ServerState>,
    Json(body): Json<IdRequest>,
) -> Result<Json<MessageResponse>, SystemError> {
    let filter = Filter::new("id", body.id);
    let usecase = DeleteDepartmentUseCase::new(&state.departments, GenericRequest::new(filter));
    usecase.validate().await?;
    usecase.execute().await?;
    Ok(Json(MessageResponse::new("Department deleted")))
}

/// POST /api/department/get
pub async fn get(
    State(state): State<ServerState>,
    Json(body): Json<IdRequest>,
) -> Result<Json<Department>, SystemError> {
    let filter = Filter::new("id", body.id);
    let usecase = GetDepartmentByIdUseCase::new(&state.departments, GenericRequest::new(filter));
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}

/// POST /api/department/get-all
pub async fn get_all(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<PaginatedResponse<Department>>, SystemError> {
    let query = search_query_or_default(&body)?;
    let usecase = ListDepartmentUseCase::new(GenericRequest::new(query), &state.departments);
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}
