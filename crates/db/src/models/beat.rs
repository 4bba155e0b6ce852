//! Beat entity model and DTOs.

use beatboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::act::Act;

/// A row from the `beats` table.
///
/// `beat_sheet_id` is not serialized; ownership is implied by the URL path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Beat {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub beat_sheet_id: DbId,
    pub description: String,
    pub timestamp: Timestamp,
}

/// DTO for creating a new beat.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBeat {
    pub description: Option<String>,
}

/// DTO for updating an existing beat. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBeat {
    pub description: Option<String>,
}

/// A beat with its acts, as embedded in the beat sheet tree.
#[derive(Debug, Serialize)]
pub struct BeatDetail {
    pub id: DbId,
    pub description: String,
    pub timestamp: Timestamp,
    pub acts: Vec<Act>,
}
