//! Route definitions for the `/suggestion` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::suggestion;
use crate::state::AppState;

/// Routes mounted at `/suggestion`.
///
/// ```text
/// POST /next -> next
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/next", post(suggestion::next))
}
