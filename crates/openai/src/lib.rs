//! Chat-completion client library.
//!
//! Wraps an OpenAI-compatible `/chat/completions` endpoint behind a small
//! typed client used for story suggestions.

pub mod api;

pub use api::{OpenAIApi, OpenAIApiError};
