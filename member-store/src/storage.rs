//! redb-based persistence for the member collection
//!
//! The storage contract is a single key-value slot: the full member
//! collection serialized as one JSON array under a fixed key. The table
//! holds exactly one row, overwritten wholesale on every successful
//! write, so a failed write leaves the previous snapshot intact.
//!
//! redb commits with `Durability::Immediate` by default: the snapshot is
//! persistent as soon as `commit()` returns and the file is always in a
//! consistent state.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, TableDefinition};
use shared::models::Member;
use thiserror::Error;

/// Snapshot table: key = slot name, value = JSON-serialized `Vec<Member>`
const MEMBERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("members");

/// The only key ever written to [`MEMBERS_TABLE`]
const SNAPSHOT_KEY: &str = "gym_members";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Member snapshot storage backed by redb
#[derive(Clone)]
pub struct MemberStorage {
    db: Arc<Database>,
}

impl MemberStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Create the snapshot table if it doesn't exist
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(MEMBERS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(MEMBERS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Read the persisted snapshot.
    ///
    /// `Ok(None)` means the slot was never written. Deserialization
    /// failures surface as [`StorageError::Serialization`]; the store
    /// decides how to recover.
    pub fn read_snapshot(&self) -> StorageResult<Option<Vec<Member>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(MEMBERS_TABLE)?;

        match table.get(SNAPSHOT_KEY)? {
            Some(value) => {
                let members: Vec<Member> = serde_json::from_slice(value.value())?;
                Ok(Some(members))
            }
            None => Ok(None),
        }
    }

    /// Overwrite the snapshot with the full current collection.
    pub fn write_snapshot(&self, members: &[Member]) -> StorageResult<()> {
        let value = serde_json::to_vec(members)?;
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(MEMBERS_TABLE)?;
            table.insert(SNAPSHOT_KEY, value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Write raw bytes into the snapshot slot (corruption scenarios)
    #[cfg(test)]
    pub fn write_raw_snapshot(&self, bytes: &[u8]) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(MEMBERS_TABLE)?;
            table.insert(SNAPSHOT_KEY, bytes)?;
        }
        txn.commit()?;
        Ok(())
    }
}
