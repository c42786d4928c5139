//! Position API handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use shared::client::{IdRequest, MessageResponse};
use shared::error::SystemError;
use shared::models::{CreatePosition, ModifyPosition, Position};
use shared::query::{Filter, PaginatedResponse};

use crate::api::search_query_or_default;
use crate::core::ServerState;
use crate::usecases::GenericRequest;
use crate::usecases::position::{
    CreatePositionUseCase, DeletePositionUseCase, GetPositionByIdUseCase, ListPositionUseCase,
    UpdatePositionUseCase,
};

/// POST /api/position/create
pub async fn create(
    State(state): State<ServerState>,
    Json(body): Json<CreatePosition>,
) -> Result<Json<Position>, SystemError> {
    tracing::info!(title = %body.title, code = %body.code, "Creating position");

    let usecase = CreatePositionUseCase::new(GenericRequest::new(body), &state.positions);
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}

/// POST /api/position/update
pub async fn update(
    State(state): State<ServerState>,
    Json(body): Json<ModifyPosition>,
) -> Result<Json<Position>, SystemError> {
    let usecase = UpdatePositionUseCase::new(GenericRequest::new(body), &state.positions);
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}

/// POST /api/position/delete
pub async fn delete(
    State(state): State<ServerState>,
    Json(body): Json<IdRequest>,
) -> Result<Json<MessageResponse>, SystemError> {
    let filter = Filter::new("id", body.id);
    let usecase = DeletePositionUseCase::new(&state.positions, GenericRequest::new(filter));
    usecase.validate().await?;
    usecase.execute().await?;
    Ok(Json(MessageResponse::new("Position deleted")))
}

/// POST /api/position/get
pub async fn get(
    State(state): State<ServerState>,
    Json(body): Json<IdRequest>,
) -> Result<Json<Position>, SystemError> {
    let filter = Filter::new("id", body.id);
    let usecase = GetPositionByIdUseCase::new(&state.positions, GenericRequest::new(filter));
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}

/// POST /api/position/get-all
pub async fn get_all(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<PaginatedResponse<Position>>, SystemError> {
    let query = search_query_or_default(&body)?;
    let usecase = ListPositionUseCase::new(GenericRequest::new(query), &state.positions);
    usecase.validate().await?;
    Ok(Json(usecase.execute().await?))
}
