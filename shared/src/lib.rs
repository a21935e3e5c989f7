//! Shared types for the member management core
//!
//! Domain models used by the validation engine and the member store:
//! the member entity, draft/update payloads, and the static membership
//! type catalog.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
