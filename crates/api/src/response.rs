//! Shared response types for API handlers.

use serde::Serialize;

/// Confirmation payload returned by delete endpoints.
///
/// Deletes answer with `200` and a `{ "message": ... }` body rather than
/// `204`, so clients get an explicit confirmation string.
#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: &'static str,
}
