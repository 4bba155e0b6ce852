//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Child-entity methods are
//! scoped to the owning parent so an id from another subtree never
//! resolves.

pub mod act_repo;
pub mod beat_repo;
pub mod beat_sheet_repo;

pub use act_repo::ActRepo;
pub use beat_repo::BeatRepo;
pub use beat_sheet_repo::BeatSheetRepo;
