use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use db::repository::transports as transport_repo;
use tracing::info;

use super::AppState;
use crate::{
    dto::{DataResponse, MessageResponse, TransportDto},
    extract::TransportBody,
    ApiError,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TransportDto>>, ApiError> {
    let mut conn = state.connection().await?;
    let rows = transport_repo::list_transports(&mut conn).await?;

    Ok(Json(rows.into_iter().map(TransportDto::from).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    TransportBody(transport): TransportBody,
) -> Result<Json<DataResponse>, ApiError> {
    let mut conn = state.connection().await?;
    let row = transport_repo::create_transport(&mut conn, &transport).await?;
    info!(id = row.id, "transport created");

    Ok(Json(DataResponse::new("Transporte agregado", row)))
}

pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<TransportBody, ApiError>,
) -> Result<Json<DataResponse>, ApiError> {
    let Path(id) = id?;
    let TransportBody(transport) = body?;

    let mut conn = state.connection().await?;
    let row = transport_repo::update_transport(&mut conn, id, &transport).await?;
    info!(id, "transport updated");

    Ok(Json(DataResponse::new("Transporte actualizado", row)))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;

    let mut conn = state.connection().await?;
    transport_repo::delete_transport(&mut conn, id).await?;
    info!(id, "transport deleted");

    Ok(Json(MessageResponse::new("Transporte eliminado")))
}
