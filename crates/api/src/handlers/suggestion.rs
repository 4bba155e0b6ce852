//! Handler for the `/suggestion/next` endpoint.
//!
//! Flattens a beat sheet's subtree into a compact JSON outline, asks the
//! chat-completions API for the next beat or act, and relays the reply.

use axum::extract::State;
use axum::Json;
use beatboard_core::error::CoreError;
use beatboard_core::types::DbId;
use beatboard_db::repositories::BeatSheetRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const SYSTEM_PROMPT: &str = "Given the following beats and acts in a screenplay:";
const MAX_TOKENS: u32 = 150;
const TEMPERATURE: f32 = 0.7;

/// Request body for `POST /suggestion/next`.
#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub beat_sheet_id: Option<DbId>,
}

/// Response body carrying the model's reply verbatim.
#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestion: String,
}

/// A beat as presented to the model: description plus its acts, in
/// insertion order. Field names here are prompt payload, not REST wire
/// format, so `camera_angle` stays snake_case.
#[derive(Serialize)]
struct BeatOutline<'a> {
    description: &'a str,
    acts: Vec<ActOutline<'a>>,
}

#[derive(Serialize)]
struct ActOutline<'a> {
    description: &'a str,
    duration: i32,
    camera_angle: Option<&'a str>,
}

/// POST /suggestion/next
pub async fn next(
    State(state): State<AppState>,
    Json(input): Json<SuggestionRequest>,
) -> AppResult<Json<SuggestionResponse>> {
    let beat_sheet_id = input
        .beat_sheet_id
        .ok_or_else(|| CoreError::Validation("beat_sheet_id is required".to_string()))?;

    let tree = BeatSheetRepo::fetch_tree(&state.pool, beat_sheet_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Beat sheet",
            id: beat_sheet_id,
        }))?;

    let outline: Vec<BeatOutline> = tree
        .beats
        .iter()
        .map(|beat| BeatOutline {
            description: &beat.description,
            acts: beat
                .acts
                .iter()
                .map(|act| ActOutline {
                    description: &act.description,
                    duration: act.duration,
                    camera_angle: act.camera_angle.as_deref(),
                })
                .collect(),
        })
        .collect();

    let summary = serde_json::to_string(&outline)
        .map_err(|err| CoreError::Internal(format!("Failed to serialize outline: {err}")))?;

    let user_prompt = format!(
        "Here is a beat sheet:\n{summary}\nSuggest the next beat or act to continue the story."
    );

    let suggestion = state
        .openai
        .complete(SYSTEM_PROMPT, &user_prompt, MAX_TOKENS, TEMPERATURE)
        .await?;

    Ok(Json(SuggestionResponse { suggestion }))
}
