//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity
//! type. Handlers delegate to the corresponding repository in
//! `beatboard_db` and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod act;
pub mod beat;
pub mod beat_sheet;
pub mod suggestion;
