//! Beat sheet entity model and DTOs.

use beatboard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::beat::BeatDetail;

/// A row from the `beat_sheets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BeatSheet {
    pub id: DbId,
    pub title: String,
}

/// DTO for creating a new beat sheet.
///
/// `title` stays optional at the wire level so the handler can reject a
/// missing field with a 400 instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBeatSheet {
    pub title: Option<String>,
}

/// DTO for updating an existing beat sheet. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBeatSheet {
    pub title: Option<String>,
}

/// A beat sheet with its full beat and act subtree.
#[derive(Debug, Serialize)]
pub struct BeatSheetDetail {
    pub id: DbId,
    pub title: String,
    pub beats: Vec<BeatDetail>,
}
