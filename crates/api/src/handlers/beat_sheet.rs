//! Handlers for the `/beatsheet` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use beatboard_core::error::CoreError;
use beatboard_core::types::DbId;
use beatboard_db::models::beat_sheet::{
    BeatSheet, BeatSheetDetail, CreateBeatSheet, UpdateBeatSheet,
};
use beatboard_db::repositories::BeatSheetRepo;

use crate::error::{AppError, AppResult};
use crate::response::DeleteConfirmation;
use crate::state::AppState;

/// POST /beatsheet
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBeatSheet>,
) -> AppResult<(StatusCode, Json<BeatSheet>)> {
    let title = input
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| CoreError::Validation("Title is required".to_string()))?;

    let sheet = BeatSheetRepo::create(&state.pool, title).await?;
    Ok((StatusCode::CREATED, Json(sheet)))
}

/// GET /beatsheet
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BeatSheet>>> {
    let sheets = BeatSheetRepo::list(&state.pool).await?;
    Ok(Json(sheets))
}

/// GET /beatsheet/{id}
///
/// Returns the sheet with its full beat and act subtree.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BeatSheetDetail>> {
    let tree = BeatSheetRepo::fetch_tree(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Beat sheet",
            id,
        }))?;
    Ok(Json(tree))
}

/// PUT /beatsheet/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBeatSheet>,
) -> AppResult<Json<BeatSheet>> {
    let sheet = BeatSheetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Beat sheet",
            id,
        }))?;
    Ok(Json(sheet))
}

/// DELETE /beatsheet/{id}
///
/// The database cascades the delete through beats and acts.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeleteConfirmation>> {
    let deleted = BeatSheetRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(DeleteConfirmation {
            message: "Beat sheet deleted successfully",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Beat sheet",
            id,
        }))
    }
}
