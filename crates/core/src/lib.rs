pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::{DbId, Timestamp};
