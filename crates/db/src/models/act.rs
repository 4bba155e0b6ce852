//! Act entity model and DTOs.

use beatboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `acts` table.
///
/// `beat_id` is not serialized; ownership is implied by the URL path.
/// `camera_angle` uses the wire name `cameraAngle`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Act {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub beat_id: DbId,
    pub description: String,
    pub timestamp: Timestamp,
    pub duration: i32,
    #[serde(rename = "cameraAngle")]
    pub camera_angle: Option<String>,
}

/// DTO for creating a new act.
///
/// `description` and `duration` stay optional at the wire level so the
/// handler can reject missing fields with a 400 instead of a
/// deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAct {
    pub description: Option<String>,
    pub duration: Option<i32>,
    #[serde(rename = "cameraAngle")]
    pub camera_angle: Option<String>,
}

/// DTO for updating an existing act. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAct {
    pub description: Option<String>,
    pub duration: Option<i32>,
    #[serde(rename = "cameraAngle")]
    pub camera_angle: Option<String>,
}
