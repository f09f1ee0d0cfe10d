//! Handlers for the `/cars` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use motorhub_core::error::CoreError;
use motorhub_db::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};
use motorhub_db::store::Record;

use super::{record_id, DeletedResponse};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::RequireAuth;
use crate::state::AppState;

/// GET /cars
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Vehicle>>> {
    let vehicles = state.store_call(state.store.vehicles.find_all()).await?;
    Ok(Json(vehicles))
}

/// GET /cars/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Vehicle>> {
    let id = record_id(Vehicle::ENTITY, &raw_id)?;
    let vehicle = state
        .store_call(state.store.vehicles.find_by_id(id))
        .await?
        .ok_or_else(|| CoreError::not_found(Vehicle::ENTITY, id))?;
    Ok(Json(vehicle))
}

/// POST /cars
pub async fn create(
    auth: RequireAuth,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateVehicle>,
) -> AppResult<(StatusCode, Json<Vehicle>)> {
    let input = input.validate()?;
    let vehicle = state.store_call(state.store.vehicles.create(&input)).await?;
    tracing::info!(id = %vehicle.id, model = %vehicle.model, by = %auth.subject, "Vehicle created");
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// PUT /cars/{id}
pub async fn update(
    auth: RequireAuth,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    AppJson(input): AppJson<UpdateVehicle>,
) -> AppResult<Json<Vehicle>> {
    let id = record_id(Vehicle::ENTITY, &raw_id)?;
    input.validate()?;
    let vehicle = state
        .store_call(state.store.vehicles.update_by_id(id, &input))
        .await?
        .ok_or_else(|| CoreError::not_found(Vehicle::ENTITY, id))?;
    tracing::info!(%id, by = %auth.subject, "Vehicle updated");
    Ok(Json(vehicle))
}

/// DELETE /cars/{id}
pub async fn delete(
    auth: RequireAuth,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DeletedResponse>> {
    let id = record_id(Vehicle::ENTITY, &raw_id)?;
    let deleted = state.store_call(state.store.vehicles.delete_by_id(id)).await?;
    if !deleted {
        return Err(CoreError::not_found(Vehicle::ENTITY, id).into());
    }
    tracing::info!(%id, by = %auth.subject, "Vehicle deleted");
    Ok(Json(DeletedResponse::new(Vehicle::ENTITY)))
}
