//! Member management core
//!
//! Two collaborating pieces:
//!
//! - [`validation`] — pure field validators producing a field → message
//!   error map for a raw member form draft.
//! - [`store`] — the canonical in-memory member collection, mirrored to a
//!   single redb snapshot slot on every mutation.
//!
//! The caller (a form UI) validates a draft against the store's
//! [`MemberStore::existing_emails`], builds a [`shared::models::Member`]
//! once the error map is empty, and hands it to [`MemberStore::add`].

pub mod query;
pub mod storage;
pub mod store;
pub mod validation;

// Re-exports
pub use query::{MemberFilter, MemberStats};
pub use storage::{MemberStorage, StorageError, StorageResult};
pub use store::MemberStore;
