//! Shared handle to the SQLite store.
//!
//! # Design
//! One connection guarded by a mutex, wrapped in an `Arc` so the handle is
//! cheap to clone into every DAO and every request. All statements are
//! single reads, so serialising them on one connection needs no further
//! locking discipline.

use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::error::DataAccessError;

/// Cloneable handle to the backing database. Clones share one connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open an existing database file read-only. A missing file is an
    /// error rather than a silently created empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DataAccessError> {
        Self::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
    }

    /// Open a database file for writing, creating it if needed. Only used
    /// to seed a store before serving.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, DataAccessError> {
        Self::open_with_flags(
            path.as_ref(),
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
    }

    /// A private, empty in-memory store.
    pub fn open_in_memory() -> Result<Self, DataAccessError> {
        let conn = Connection::open_in_memory().map_err(|source| DataAccessError::Open {
            path: ":memory:".into(),
            source,
        })?;
        Ok(Self::from_connection(conn))
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    fn open_with_flags(path: &Path, flags: OpenFlags) -> Result<Self, DataAccessError> {
        debug!(path = %path.display(), "opening database");
        let conn =
            Connection::open_with_flags(path, flags).map_err(|source| DataAccessError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_connection(conn))
    }

    /// Run `f` with exclusive access to the connection.
    pub fn with_connection<T, F>(&self, f: F) -> Result<T, DataAccessError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self.conn.lock().map_err(|_| DataAccessError::Poisoned)?;
        Ok(f(&conn)?)
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}
