//! Error type for the data-access layer.
//!
//! # Design
//! Absent rows are not errors; they surface as `None` or an empty `Vec`.
//! Everything in here means the store could not answer the query at all.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by `Database` and the DAOs.
#[derive(Debug, Error)]
pub enum DataAccessError {
    /// The database file could not be opened.
    #[error("failed to open database at {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// SQLite rejected or failed to execute a statement.
    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),

    /// A previous holder of the connection panicked mid-query.
    #[error("database connection lock poisoned")]
    Poisoned,
}
