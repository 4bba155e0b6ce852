//! Handlers for the `/act` resource.
//!
//! Acts sit at the bottom of the hierarchy:
//! `/beatsheet/{beat_sheet_id}/beat/{beat_id}/act[/{id}]`
//!
//! Every operation resolves the full ownership chain (sheet, then beat
//! within that sheet) before touching the act.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use beatboard_core::error::CoreError;
use beatboard_core::types::DbId;
use beatboard_db::models::act::{Act, CreateAct, UpdateAct};
use beatboard_db::repositories::{ActRepo, BeatRepo, BeatSheetRepo};

use crate::error::{AppError, AppResult};
use crate::response::DeleteConfirmation;
use crate::state::AppState;

/// Resolve the sheet -> beat ownership chain, failing with the first
/// missing level.
async fn resolve_chain(
    state: &AppState,
    beat_sheet_id: DbId,
    beat_id: DbId,
) -> AppResult<()> {
    BeatSheetRepo::find_by_id(&state.pool, beat_sheet_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Beat sheet",
            id: beat_sheet_id,
        }))?;

    BeatRepo::find_in_sheet(&state.pool, beat_sheet_id, beat_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Beat",
            id: beat_id,
        }))?;

    Ok(())
}

/// POST /beatsheet/{beat_sheet_id}/beat/{beat_id}/act
///
/// The ownership chain is resolved before field validation, so a bad
/// sheet or beat id answers 404 even when the body is incomplete.
pub async fn create(
    State(state): State<AppState>,
    Path((beat_sheet_id, beat_id)): Path<(DbId, DbId)>,
    Json(input): Json<CreateAct>,
) -> AppResult<(StatusCode, Json<Act>)> {
    resolve_chain(&state, beat_sheet_id, beat_id).await?;

    let description = input
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .ok_or_else(|| CoreError::Validation("Description is required".to_string()))?;
    let duration = input
        .duration
        .ok_or_else(|| CoreError::Validation("Duration is required".to_string()))?;

    let act = ActRepo::create(
        &state.pool,
        beat_id,
        description,
        duration,
        input.camera_angle.as_deref(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(act)))
}

/// PUT /beatsheet/{beat_sheet_id}/beat/{beat_id}/act/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((beat_sheet_id, beat_id, id)): Path<(DbId, DbId, DbId)>,
    Json(input): Json<UpdateAct>,
) -> AppResult<Json<Act>> {
    resolve_chain(&state, beat_sheet_id, beat_id).await?;

    let act = ActRepo::update_in_beat(&state.pool, beat_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Act", id }))?;
    Ok(Json(act))
}

/// DELETE /beatsheet/{beat_sheet_id}/beat/{beat_id}/act/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((beat_sheet_id, beat_id, id)): Path<(DbId, DbId, DbId)>,
) -> AppResult<Json<DeleteConfirmation>> {
    resolve_chain(&state, beat_sheet_id, beat_id).await?;

    let deleted = ActRepo::delete_in_beat(&state.pool, beat_id, id).await?;
    if deleted {
        Ok(Json(DeleteConfirmation {
            message: "Act deleted successfully",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Act", id }))
    }
}
