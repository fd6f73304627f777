//! Schema and sample dataset.
//!
//! Creates the four tables the DAOs read from and fills them with a handful
//! of well-known films. Used by the test suites and by the server's
//! `--seed` flag to bootstrap an empty database file.

use crate::db::Database;
use crate::error::DataAccessError;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    year INTEGER
);
CREATE TABLE IF NOT EXISTS people (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    birth INTEGER
);
CREATE TABLE IF NOT EXISTS ratings (
    movie_id INTEGER PRIMARY KEY REFERENCES movies (id),
    rating REAL NOT NULL,
    votes INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS stars (
    movie_id INTEGER NOT NULL REFERENCES movies (id),
    person_id INTEGER NOT NULL REFERENCES people (id),
    PRIMARY KEY (movie_id, person_id)
);
";

const SAMPLE_DATA: &str = "
INSERT OR IGNORE INTO movies (id, title, year) VALUES
    (1, 'The Shawshank Redemption', 1994),
    (2, 'The Godfather', 1972),
    (3, 'The Godfather: Part II', 1974),
    (4, 'The Dark Knight', 2008),
    (5, '12 Angry Men', 1957);
INSERT OR IGNORE INTO people (id, name, birth) VALUES
    (1, 'Tim Robbins', 1958),
    (2, 'Morgan Freeman', 1937),
    (3, 'Christopher Nolan', 1970),
    (4, 'Al Pacino', 1940),
    (5, 'Henry Fonda', 1905);
INSERT OR IGNORE INTO stars (movie_id, person_id) VALUES
    (1, 1), (1, 2), (2, 4), (3, 4), (4, 3), (5, 5);
INSERT OR IGNORE INTO ratings (movie_id, rating, votes) VALUES
    (1, 9.3, 2200000),
    (2, 9.2, 1500000),
    (3, 9.0, 1000000),
    (4, 9.0, 2100000),
    (5, 9.0, 700000);
";

/// Create the schema if missing and insert the sample rows. Safe to run
/// more than once.
pub fn apply(db: &Database) -> Result<(), DataAccessError> {
    db.with_connection(|conn| {
        conn.execute_batch(SCHEMA)?;
        conn.execute_batch(SAMPLE_DATA)
    })
}

/// A fresh in-memory store holding the sample dataset.
pub fn in_memory() -> Result<Database, DataAccessError> {
    let db = Database::open_in_memory()?;
    apply(&db)?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(db: &Database, table: &str) -> i64 {
        db.with_connection(|conn| {
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))
        })
        .unwrap()
    }

    #[test]
    fn seeds_every_table() {
        let db = in_memory().unwrap();
        assert_eq!(count(&db, "movies"), 5);
        assert_eq!(count(&db, "people"), 5);
        assert_eq!(count(&db, "ratings"), 5);
        assert_eq!(count(&db, "stars"), 6);
    }

    #[test]
    fn applying_twice_does_not_duplicate_rows() {
        let db = in_memory().unwrap();
        apply(&db).unwrap();
        assert_eq!(count(&db, "movies"), 5);
        assert_eq!(count(&db, "stars"), 6);
    }
}
