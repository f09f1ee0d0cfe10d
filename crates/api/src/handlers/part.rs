//! Handlers for the `/parts` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use motorhub_core::error::CoreError;
use motorhub_db::models::part::{CreatePart, Part, UpdatePart};
use motorhub_db::store::Record;

use super::{record_id, DeletedResponse};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::RequireAuth;
use crate::state::AppState;

/// GET /parts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Part>>> {
    let parts = state.store_call(state.store.parts.find_all()).await?;
    Ok(Json(parts))
}

/// GET /parts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Part>> {
    let id = record_id(Part::ENTITY, &raw_id)?;
    let part = state
        .store_call(state.store.parts.find_by_id(id))
        .await?
        .ok_or_else(|| CoreError::not_found(Part::ENTITY, id))?;
    Ok(Json(part))
}

/// POST /parts
pub async fn create(
    auth: RequireAuth,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePart>,
) -> AppResult<(StatusCode, Json<Part>)> {
    let input = input.validate()?;
    let part = state.store_call(state.store.parts.create(&input)).await?;
    tracing::info!(id = %part.id, part_number = %part.part_number, by = %auth.subject, "Part created");
    Ok((StatusCode::CREATED, Json(part)))
}

/// PUT /parts/{id}
pub async fn update(
    auth: RequireAuth,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    AppJson(input): AppJson<UpdatePart>,
) -> AppResult<Json<Part>> {
    let id = record_id(Part::ENTITY, &raw_id)?;
    input.validate()?;
    let part = state
        .store_call(state.store.parts.update_by_id(id, &input))
        .await?
        .ok_or_else(|| CoreError::not_found(Part::ENTITY, id))?;
    tracing::info!(%id, by = %auth.subject, "Part updated");
    Ok(Json(part))
}

/// DELETE /parts/{id}
pub async fn delete(
    auth: RequireAuth,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DeletedResponse>> {
    let id = record_id(Part::ENTITY, &raw_id)?;
    let deleted = state.store_call(state.store.parts.delete_by_id(id)).await?;
    if !deleted {
        return Err(CoreError::not_found(Part::ENTITY, id).into());
    }
    tracing::info!(%id, by = %auth.subject, "Part deleted");
    Ok(Json(DeletedResponse::new(Part::ENTITY)))
}
