//! Handlers for the `/beat` resource.
//!
//! Beats are nested under beat sheets:
//! `/beatsheet/{beat_sheet_id}/beat[/{id}]`
//!
//! Every operation resolves the owning sheet first, so a beat id from a
//! different sheet reads as "not found" rather than leaking across trees.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use beatboard_core::error::CoreError;
use beatboard_core::types::DbId;
use beatboard_db::models::beat::{Beat, CreateBeat, UpdateBeat};
use beatboard_db::repositories::{BeatRepo, BeatSheetRepo};

use crate::error::{AppError, AppResult};
use crate::response::DeleteConfirmation;
use crate::state::AppState;

/// POST /beatsheet/{beat_sheet_id}/beat
///
/// Field validation runs before the sheet is resolved, so a request that
/// is missing `description` gets a 400 even when the sheet id is bad.
pub async fn create(
    State(state): State<AppState>,
    Path(beat_sheet_id): Path<DbId>,
    Json(input): Json<CreateBeat>,
) -> AppResult<(StatusCode, Json<Beat>)> {
    let description = input
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .ok_or_else(|| CoreError::Validation("Description is required".to_string()))?;

    BeatSheetRepo::find_by_id(&state.pool, beat_sheet_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Beat sheet",
            id: beat_sheet_id,
        }))?;

    let beat = BeatRepo::create(&state.pool, beat_sheet_id, description).await?;
    Ok((StatusCode::CREATED, Json(beat)))
}

/// PUT /beatsheet/{beat_sheet_id}/beat/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((beat_sheet_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateBeat>,
) -> AppResult<Json<Beat>> {
    BeatSheetRepo::find_by_id(&state.pool, beat_sheet_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Beat sheet",
            id: beat_sheet_id,
        }))?;

    let beat = BeatRepo::update_in_sheet(&state.pool, beat_sheet_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Beat", id }))?;
    Ok(Json(beat))
}

/// DELETE /beatsheet/{beat_sheet_id}/beat/{id}
///
/// The database cascades the delete through the beat's acts.
pub async fn delete(
    State(state): State<AppState>,
    Path((beat_sheet_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DeleteConfirmation>> {
    BeatSheetRepo::find_by_id(&state.pool, beat_sheet_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Beat sheet",
            id: beat_sheet_id,
        }))?;

    let deleted = BeatRepo::delete_in_sheet(&state.pool, beat_sheet_id, id).await?;
    if deleted {
        Ok(Json(DeleteConfirmation {
            message: "Beat deleted successfully",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Beat", id }))
    }
}
