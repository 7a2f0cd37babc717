//! Handlers for the `/nurses` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use shiftboard_db::models::nurse::{CreateNurse, Nurse};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/nurses
///
/// A body that fails to decode is rejected before the store is touched.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateNurse>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Nurse>)> {
    let Json(input) = payload?;
    let nurse = state.store.insert(&input).await?;
    tracing::info!(nurse_id = nurse.id, "Nurse created");
    Ok((StatusCode::CREATED, Json(nurse)))
}

/// GET /api/nurses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Nurse>>> {
    let nurses = state.store.list_all().await?;
    Ok(Json(nurses))
}
