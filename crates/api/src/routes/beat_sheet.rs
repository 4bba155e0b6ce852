//! Route definitions for the `/beatsheet` resource.
//!
//! Also nests beat and act routes under
//! `/beatsheet/{beat_sheet_id}/beat/...`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{act, beat, beat_sheet};
use crate::state::AppState;

/// Routes mounted at `/beatsheet`.
///
/// ```text
/// GET    /                                      -> list
/// POST   /                                      -> create
/// GET    /{id}                                  -> get_by_id
/// PUT    /{id}                                  -> update
/// DELETE /{id}                                  -> delete
///
/// POST   /{beat_sheet_id}/beat                  -> create
/// PUT    /{beat_sheet_id}/beat/{id}             -> update
/// DELETE /{beat_sheet_id}/beat/{id}             -> delete
///
/// POST   /{beat_sheet_id}/beat/{beat_id}/act           -> create
/// PUT    /{beat_sheet_id}/beat/{beat_id}/act/{id}      -> update
/// DELETE /{beat_sheet_id}/beat/{beat_id}/act/{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    let act_routes = Router::new()
        .route("/", post(act::create))
        .route("/{id}", put(act::update).delete(act::delete));

    let beat_routes = Router::new()
        .route("/", post(beat::create))
        .route("/{id}", put(beat::update).delete(beat::delete))
        .nest("/{beat_id}/act", act_routes);

    Router::new()
        .route("/", get(beat_sheet::list).post(beat_sheet::create))
        .route(
            "/{id}",
            get(beat_sheet::get_by_id)
                .put(beat_sheet::update)
                .delete(beat_sheet::delete),
        )
        .nest("/{beat_sheet_id}/beat", beat_routes)
}
