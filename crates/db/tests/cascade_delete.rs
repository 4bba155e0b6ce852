//! Integration tests for cascade delete behaviour.
//!
//! Deleting a beat sheet must remove its beats and their acts; deleting a
//! beat must remove its acts while leaving siblings untouched. Cascades
//! are enforced by the database (`ON DELETE CASCADE`), so these tests go
//! through the repositories and then verify nothing is left reachable.

use beatboard_db::repositories::{ActRepo, BeatRepo, BeatSheetRepo};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_sheet_cascades_to_beats_and_acts(pool: PgPool) {
    let sheet = BeatSheetRepo::create(&pool, "Doomed").await.unwrap();
    let beat = BeatRepo::create(&pool, sheet.id, "Doomed beat")
        .await
        .unwrap();
    ActRepo::create(&pool, beat.id, "Doomed act", 30, None)
        .await
        .unwrap();

    let deleted = BeatSheetRepo::delete(&pool, sheet.id).await.unwrap();
    assert!(deleted);

    // Nothing under the sheet is reachable any more.
    assert!(BeatSheetRepo::find_by_id(&pool, sheet.id)
        .await
        .unwrap()
        .is_none());
    assert!(BeatRepo::find_in_sheet(&pool, sheet.id, beat.id)
        .await
        .unwrap()
        .is_none());
    assert!(BeatRepo::list_by_sheet(&pool, sheet.id)
        .await
        .unwrap()
        .is_empty());
    assert!(ActRepo::list_by_sheet(&pool, sheet.id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_beat_cascades_to_acts(pool: PgPool) {
    let sheet = BeatSheetRepo::create(&pool, "Partial cascade")
        .await
        .unwrap();
    let doomed = BeatRepo::create(&pool, sheet.id, "Doomed beat")
        .await
        .unwrap();
    let survivor = BeatRepo::create(&pool, sheet.id, "Surviving beat")
        .await
        .unwrap();

    let doomed_act = ActRepo::create(&pool, doomed.id, "Doomed act", 10, None)
        .await
        .unwrap();
    let surviving_act = ActRepo::create(&pool, survivor.id, "Surviving act", 20, None)
        .await
        .unwrap();

    let deleted = BeatRepo::delete_in_sheet(&pool, sheet.id, doomed.id)
        .await
        .unwrap();
    assert!(deleted);

    // The doomed beat's act is gone; the sibling's act remains.
    let remaining = ActRepo::list_by_sheet(&pool, sheet.id).await.unwrap();
    let ids: Vec<i64> = remaining.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![surviving_act.id]);
    assert!(!ids.contains(&doomed_act.id));

    // The sibling beat itself is untouched.
    let found = BeatRepo::find_in_sheet(&pool, sheet.id, survivor.id)
        .await
        .unwrap();
    assert!(found.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_beat_returns_false(pool: PgPool) {
    let sheet = BeatSheetRepo::create(&pool, "Empty").await.unwrap();
    let deleted = BeatRepo::delete_in_sheet(&pool, sheet.id, 999_999)
        .await
        .unwrap();
    assert!(!deleted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_act_returns_false(pool: PgPool) {
    let sheet = BeatSheetRepo::create(&pool, "Empty").await.unwrap();
    let beat = BeatRepo::create(&pool, sheet.id, "No acts").await.unwrap();
    let deleted = ActRepo::delete_in_beat(&pool, beat.id, 999_999)
        .await
        .unwrap();
    assert!(!deleted);
}
