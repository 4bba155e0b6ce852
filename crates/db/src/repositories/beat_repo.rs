//! Repository for the `beats` table.

use beatboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::beat::{Beat, UpdateBeat};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, beat_sheet_id, description, timestamp";

/// Provides CRUD operations for beats, scoped to their owning beat sheet.
pub struct BeatRepo;

impl BeatRepo {
    /// Insert a new beat under a beat sheet, returning the created row.
    ///
    /// `timestamp` is assigned by the database (`DEFAULT NOW()`).
    pub async fn create(
        pool: &PgPool,
        beat_sheet_id: DbId,
        description: &str,
    ) -> Result<Beat, sqlx::Error> {
        let query = format!(
            "INSERT INTO beats (beat_sheet_id, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Beat>(&query)
            .bind(beat_sheet_id)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// Find a beat by ID within a given beat sheet.
    ///
    /// Returns `None` if the beat does not exist or belongs to a different
    /// sheet.
    pub async fn find_in_sheet(
        pool: &PgPool,
        beat_sheet_id: DbId,
        beat_id: DbId,
    ) -> Result<Option<Beat>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM beats WHERE id = $2 AND beat_sheet_id = $1");
        sqlx::query_as::<_, Beat>(&query)
            .bind(beat_sheet_id)
            .bind(beat_id)
            .fetch_optional(pool)
            .await
    }

    /// List all beats in a beat sheet, ordered by insertion (id ascending).
    pub async fn list_by_sheet(
        pool: &PgPool,
        beat_sheet_id: DbId,
    ) -> Result<Vec<Beat>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM beats
             WHERE beat_sheet_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Beat>(&query)
            .bind(beat_sheet_id)
            .fetch_all(pool)
            .await
    }

    /// Update a beat within a given beat sheet. Only non-`None` fields in
    /// `input` are applied; `timestamp` is refreshed on every successful
    /// update.
    ///
    /// Returns `None` if the beat does not exist in that sheet.
    pub async fn update_in_sheet(
        pool: &PgPool,
        beat_sheet_id: DbId,
        beat_id: DbId,
        input: &UpdateBeat,
    ) -> Result<Option<Beat>, sqlx::Error> {
        let query = format!(
            "UPDATE beats SET
                description = COALESCE($3, description),
                timestamp = NOW()
             WHERE id = $2 AND beat_sheet_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Beat>(&query)
            .bind(beat_sheet_id)
            .bind(beat_id)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a beat within a given beat sheet. The database cascades the
    /// delete to the beat's acts. Returns `true` if a row was deleted.
    pub async fn delete_in_sheet(
        pool: &PgPool,
        beat_sheet_id: DbId,
        beat_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM beats WHERE id = $2 AND beat_sheet_id = $1")
            .bind(beat_sheet_id)
            .bind(beat_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
