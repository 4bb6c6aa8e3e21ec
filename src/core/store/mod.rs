//! SQLite-backed record store
//!
//! Owns the single database connection and enforces the data-model
//! invariants at write time: required fields must be non-empty, blank
//! optional strings are stored as NULL, and ids are assigned once and
//! never reused.
//!
//! Read operations live directly on [`Store`]. Mutations are crate-private
//! here and exposed only through [`crate::core::auth::Session`], so callers
//! must authenticate before they can change anything.

mod assets;
mod items;
mod schema;
mod users;

use std::fs;
use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

/// The record store backed by SQLite
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open or create the database at `path`.
    ///
    /// The schema is applied idempotently and the default login is seeded
    /// when the user table is empty, so this is safe to call on every run.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| StoreError::IoError(e.to_string()))?;
            }
        }

        let conn = Connection::open(path)?;

        // WAL keeps readers from blocking on the occasional write
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

        let store = Self { conn };
        store.init_schema()?;
        store.seed_default_user()?;
        Ok(store)
    }

    /// Open a fresh in-memory database, schema applied and login seeded.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        store.seed_default_user()?;
        Ok(store)
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}

/// Map a blank or whitespace-only optional string to NULL at write time
/// so absent values come back as `None` uniformly.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} is required and cannot be empty")]
    MissingField(&'static str),

    #[error("no asset found with id {0}")]
    AssetNotFound(i64),

    #[error("no inventory item found with id {0}")]
    ItemNotFound(i64),

    #[error("failed to seed credentials: {0}")]
    Credentials(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}
