use rusqlite::params;
use tracing::instrument;

use super::{collect_rows, first_row, movie_from_row, person_from_row};
use crate::db::Database;
use crate::defaults;
use crate::error::DataAccessError;
use crate::types::{Movie, MovieRating, Person};

const LIST: &str = "SELECT id, title, year FROM movies LIMIT ?1";

const BY_ID: &str = "SELECT id, title, year FROM movies WHERE id = ?1";

const RATINGS_BY_YEAR: &str = "\
    SELECT m.id, m.title, m.year, r.rating, r.votes \
    FROM movies m JOIN ratings r ON r.movie_id = m.id \
    WHERE m.year = ?1 AND r.votes > ?2 \
    ORDER BY r.rating DESC \
    LIMIT ?3";

const STARS: &str = "\
    SELECT p.id, p.name, p.birth \
    FROM people p JOIN stars s ON s.person_id = p.id \
    WHERE s.movie_id = ?1";

/// Read operations over `movies`, `ratings` and the movie side of `stars`.
#[derive(Debug, Clone)]
pub struct MovieDao {
    db: Database,
}

impl MovieDao {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Up to `limit` movies in storage order.
    #[instrument(level = "debug", skip(self))]
    pub fn list(&self, limit: u32) -> Result<Vec<Movie>, DataAccessError> {
        self.db.with_connection(|conn| {
            let mut stmt = conn.prepare_cached(LIST)?;
            let rows = stmt.query_map(params![limit], movie_from_row)?;
            collect_rows(rows, "movie")
        })
    }

    pub fn list_default(&self) -> Result<Vec<Movie>, DataAccessError> {
        self.list(defaults::LIMIT)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn by_id(&self, id: i64) -> Result<Option<Movie>, DataAccessError> {
        self.db.with_connection(|conn| {
            let mut stmt = conn.prepare_cached(BY_ID)?;
            let rows = stmt.query_map(params![id], movie_from_row)?;
            first_row(rows, "movie")
        })
    }

    /// Movies released in `year` with more than `min_votes` votes, best
    /// rated first, capped at `limit`.
    #[instrument(level = "debug", skip(self))]
    pub fn ratings_by_year(
        &self,
        limit: u32,
        min_votes: u32,
        year: i32,
    ) -> Result<Vec<MovieRating>, DataAccessError> {
        self.db.with_connection(|conn| {
            let mut stmt = conn.prepare_cached(RATINGS_BY_YEAR)?;
            let rows = stmt.query_map(params![year, min_votes, limit], |row| {
                let movie = movie_from_row(row)?;
                Ok(MovieRating::from_movie(movie, row.get(3)?, row.get(4)?))
            })?;
            collect_rows(rows, "movie rating")
        })
    }

    pub fn ratings_by_year_default(&self, year: i32) -> Result<Vec<MovieRating>, DataAccessError> {
        self.ratings_by_year(defaults::LIMIT, defaults::VOTES, year)
    }

    /// People credited in `stars` for the movie. Empty when the movie has
    /// no credits or does not exist.
    #[instrument(level = "debug", skip(self))]
    pub fn stars(&self, movie_id: i64) -> Result<Vec<Person>, DataAccessError> {
        self.db.with_connection(|conn| {
            let mut stmt = conn.prepare_cached(STARS)?;
            let rows = stmt.query_map(params![movie_id], person_from_row)?;
            collect_rows(rows, "person")
        })
    }
}
