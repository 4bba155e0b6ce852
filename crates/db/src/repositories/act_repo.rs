//! Repository for the `acts` table.

use beatboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::act::{Act, UpdateAct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, beat_id, description, timestamp, duration, camera_angle";

/// Provides CRUD operations for acts, scoped to their owning beat.
pub struct ActRepo;

impl ActRepo {
    /// Insert a new act under a beat, returning the created row.
    ///
    /// `timestamp` is assigned by the database (`DEFAULT NOW()`);
    /// `camera_angle` may be `None`.
    pub async fn create(
        pool: &PgPool,
        beat_id: DbId,
        description: &str,
        duration: i32,
        camera_angle: Option<&str>,
    ) -> Result<Act, sqlx::Error> {
        let query = format!(
            "INSERT INTO acts (beat_id, description, duration, camera_angle)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Act>(&query)
            .bind(beat_id)
            .bind(description)
            .bind(duration)
            .bind(camera_angle)
            .fetch_one(pool)
            .await
    }

    /// List all acts across a beat sheet's beats, ordered by insertion
    /// (id ascending). Used to assemble the nested tree in one query.
    pub async fn list_by_sheet(
        pool: &PgPool,
        beat_sheet_id: DbId,
    ) -> Result<Vec<Act>, sqlx::Error> {
        sqlx::query_as::<_, Act>(
            "SELECT a.id, a.beat_id, a.description, a.timestamp, a.duration, a.camera_angle
             FROM acts a
             JOIN beats b ON b.id = a.beat_id
             WHERE b.beat_sheet_id = $1
             ORDER BY a.id ASC",
        )
        .bind(beat_sheet_id)
        .fetch_all(pool)
        .await
    }

    /// Update an act within a given beat. Only non-`None` fields in `input`
    /// are applied; `timestamp` is refreshed on every successful update.
    ///
    /// Returns `None` if the act does not exist in that beat.
    pub async fn update_in_beat(
        pool: &PgPool,
        beat_id: DbId,
        act_id: DbId,
        input: &UpdateAct,
    ) -> Result<Option<Act>, sqlx::Error> {
        let query = format!(
            "UPDATE acts SET
                description = COALESCE($3, description),
                duration = COALESCE($4, duration),
                camera_angle = COALESCE($5, camera_angle),
                timestamp = NOW()
             WHERE id = $2 AND beat_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Act>(&query)
            .bind(beat_id)
            .bind(act_id)
            .bind(&input.description)
            .bind(input.duration)
            .bind(&input.camera_angle)
            .fetch_optional(pool)
            .await
    }

    /// Delete an act within a given beat. Returns `true` if a row was
    /// deleted.
    pub async fn delete_in_beat(
        pool: &PgPool,
        beat_id: DbId,
        act_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM acts WHERE id = $2 AND beat_id = $1")
            .bind(beat_id)
            .bind(act_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
