//! Data models
//!
//! Shared between the member store and the form layer. The persisted
//! snapshot shape is the serde output of [`Member`] (camelCase field
//! names, ISO-8601 `joinDate`).

pub mod member;
pub mod membership;

// Re-exports
pub use member::*;
pub use membership::*;
