//! Repository for the `beat_sheets` table.

use std::collections::HashMap;

use beatboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::act::Act;
use crate::models::beat::BeatDetail;
use crate::models::beat_sheet::{BeatSheet, BeatSheetDetail, UpdateBeatSheet};
use crate::repositories::{ActRepo, BeatRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title";

/// Provides CRUD operations for beat sheets.
pub struct BeatSheetRepo;

impl BeatSheetRepo {
    /// Insert a new beat sheet, returning the created row.
    pub async fn create(pool: &PgPool, title: &str) -> Result<BeatSheet, sqlx::Error> {
        let query = format!("INSERT INTO beat_sheets (title) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, BeatSheet>(&query)
            .bind(title)
            .fetch_one(pool)
            .await
    }

    /// Find a beat sheet by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BeatSheet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM beat_sheets WHERE id = $1");
        sqlx::query_as::<_, BeatSheet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all beat sheets, ordered by insertion (id ascending).
    pub async fn list(pool: &PgPool) -> Result<Vec<BeatSheet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM beat_sheets ORDER BY id ASC");
        sqlx::query_as::<_, BeatSheet>(&query).fetch_all(pool).await
    }

    /// Fetch a beat sheet with its complete beat and act subtree.
    ///
    /// Beats and acts are grouped in insertion order. Returns `None` if the
    /// sheet does not exist.
    pub async fn fetch_tree(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BeatSheetDetail>, sqlx::Error> {
        let Some(sheet) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let beats = BeatRepo::list_by_sheet(pool, id).await?;
        let acts = ActRepo::list_by_sheet(pool, id).await?;

        let mut acts_by_beat: HashMap<DbId, Vec<Act>> = HashMap::new();
        for act in acts {
            acts_by_beat.entry(act.beat_id).or_default().push(act);
        }

        let beats = beats
            .into_iter()
            .map(|beat| BeatDetail {
                id: beat.id,
                description: beat.description,
                timestamp: beat.timestamp,
                acts: acts_by_beat.remove(&beat.id).unwrap_or_default(),
            })
            .collect();

        Ok(Some(BeatSheetDetail {
            id: sheet.id,
            title: sheet.title,
            beats,
        }))
    }

    /// Update a beat sheet. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBeatSheet,
    ) -> Result<Option<BeatSheet>, sqlx::Error> {
        let query = format!(
            "UPDATE beat_sheets SET title = COALESCE($2, title)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BeatSheet>(&query)
            .bind(id)
            .bind(&input.title)
            .fetch_optional(pool)
            .await
    }

    /// Delete a beat sheet by ID. The database cascades the delete to all
    /// beats and acts underneath it. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM beat_sheets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
