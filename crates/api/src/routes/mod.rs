pub mod beat_sheet;
pub mod health;
pub mod suggestion;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree, mounted at the server root.
///
/// Route hierarchy:
///
/// ```text
/// /beatsheet                                       list, create
/// /beatsheet/{id}                                  get tree, update, delete
/// /beatsheet/{id}/beat                             create
/// /beatsheet/{id}/beat/{id}                        update, delete
/// /beatsheet/{id}/beat/{id}/act                    create
/// /beatsheet/{id}/beat/{id}/act/{id}               update, delete
///
/// /suggestion/next                                 next suggestion (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/beatsheet", beat_sheet::router())
        .nest("/suggestion", suggestion::router())
}
