//! Canonical in-memory member collection mirrored to persistent storage
//!
//! The store owns the collection; every mutation rewrites the snapshot
//! wholesale. A failed write is logged and the in-memory collection stays
//! authoritative, so the durable copy goes stale rather than corrupt.
//! The store is the sole writer of the snapshot slot and expects to be
//! driven by one caller at a time.

use shared::models::{Member, MemberUpdate};

use crate::query::{self, MemberFilter, MemberStats};
use crate::storage::MemberStorage;

/// Member store: in-memory collection + snapshot mirror
pub struct MemberStore {
    members: Vec<Member>,
    storage: MemberStorage,
}

impl MemberStore {
    /// Load the persisted snapshot and build a ready store.
    ///
    /// An absent or malformed snapshot yields an empty collection; the
    /// failure is logged, never raised. This is the only place
    /// deserialization errors are caught.
    pub fn load(storage: MemberStorage) -> Self {
        let members = match storage.read_snapshot() {
            Ok(Some(members)) => {
                tracing::debug!(count = members.len(), "member snapshot loaded");
                members
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!(error = %e, "failed to load member snapshot, starting empty");
                Vec::new()
            }
        };
        Self { members, storage }
    }

    /// All members, in chronological add order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look up a member by id
    pub fn get(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Append a fully-formed member and persist.
    ///
    /// The caller is responsible for prior validation and uniqueness
    /// checking; no re-validation happens here.
    pub fn add(&mut self, member: Member) {
        tracing::debug!(member_id = %member.id, "member added");
        self.members.push(member);
        self.persist();
    }

    /// Merge a partial update into the member with the given id and
    /// persist.
    ///
    /// Returns the updated record, or `None` when no member matches; the
    /// collection and snapshot are untouched in that case.
    pub fn update(&mut self, id: &str, update: MemberUpdate) -> Option<&Member> {
        let index = self.members.iter().position(|m| m.id == id)?;
        self.members[index].apply(update);
        tracing::debug!(member_id = %id, "member updated");
        self.persist();
        Some(&self.members[index])
    }

    /// Remove the member with the given id and persist. Returns whether a
    /// record was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.id != id);
        if self.members.len() == before {
            return false;
        }
        tracing::debug!(member_id = %id, "member deleted");
        self.persist();
        true
    }

    /// All emails currently in use, lowercased, for uniqueness checks by
    /// validation callers.
    pub fn existing_emails(&self) -> Vec<String> {
        self.members.iter().map(|m| m.email.to_lowercase()).collect()
    }

    /// Members matching the filter, in insertion order
    pub fn filter(&self, filter: &MemberFilter) -> Vec<&Member> {
        self.members.iter().filter(|m| filter.matches(m)).collect()
    }

    /// Status and membership breakdown over the whole collection
    pub fn stats(&self) -> MemberStats {
        MemberStats::collect(&self.members)
    }

    /// The `n` most recently joined members, newest first
    pub fn recent_members(&self, n: usize) -> Vec<&Member> {
        query::recent_members(&self.members, n)
    }

    fn persist(&self) {
        if let Err(e) = self.storage.write_snapshot(&self.members) {
            tracing::error!(error = %e, "failed to persist member snapshot");
        }
    }
}
