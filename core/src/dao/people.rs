use rusqlite::params;
use tracing::instrument;

use super::{collect_rows, first_row, movie_from_row, person_from_row};
use crate::db::Database;
use crate::defaults;
use crate::error::DataAccessError;
use crate::types::{Movie, Person};

const LIST: &str = "SELECT id, name, birth FROM people LIMIT ?1";

const BY_ID: &str = "SELECT id, name, birth FROM people WHERE id = ?1";

const MOVIES: &str = "\
    SELECT m.id, m.title, m.year \
    FROM movies m JOIN stars s ON s.movie_id = m.id \
    WHERE s.person_id = ?1";

/// Read operations over `people` and the person side of `stars`.
#[derive(Debug, Clone)]
pub struct PersonDao {
    db: Database,
}

impl PersonDao {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn list(&self, limit: u32) -> Result<Vec<Person>, DataAccessError> {
        self.db.with_connection(|conn| {
            let mut stmt = conn.prepare_cached(LIST)?;
            let rows = stmt.query_map(params![limit], person_from_row)?;
            collect_rows(rows, "person")
        })
    }

    pub fn list_default(&self) -> Result<Vec<Person>, DataAccessError> {
        self.list(defaults::LIMIT)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn by_id(&self, id: i64) -> Result<Option<Person>, DataAccessError> {
        self.db.with_connection(|conn| {
            let mut stmt = conn.prepare_cached(BY_ID)?;
            let rows = stmt.query_map(params![id], person_from_row)?;
            first_row(rows, "person")
        })
    }

    /// Movies the person is credited in.
    #[instrument(level = "debug", skip(self))]
    pub fn movies(&self, person_id: i64) -> Result<Vec<Movie>, DataAccessError> {
        self.db.with_connection(|conn| {
            let mut stmt = conn.prepare_cached(MOVIES)?;
            let rows = stmt.query_map(params![person_id], movie_from_row)?;
            collect_rows(rows, "movie")
        })
    }
}
