//! Data-access objects, one per entity group.
//!
//! SQL text is fixed per operation and every caller-supplied value is bound
//! as a positional parameter.

mod movies;
mod people;

pub use movies::MovieDao;
pub use people::PersonDao;

use rusqlite::Row;
use tracing::warn;

use crate::types::{Movie, Person};

/// Map `id, title, year` in the first three columns. A NULL year reads as 0.
fn movie_from_row(row: &Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie::new(
        row.get(0)?,
        row.get::<_, String>(1)?,
        year_or_zero(row, 2)?,
    ))
}

/// Map `id, name, birth` in the first three columns. A NULL birth reads as 0.
fn person_from_row(row: &Row<'_>) -> rusqlite::Result<Person> {
    Ok(Person::new(
        row.get(0)?,
        row.get::<_, String>(1)?,
        year_or_zero(row, 2)?,
    ))
}

/// Year columns are nullable in real datasets; only a non-integer value is
/// malformed.
fn year_or_zero(row: &Row<'_>, idx: usize) -> rusqlite::Result<i32> {
    Ok(row.get::<_, Option<i32>>(idx)?.unwrap_or(0))
}

/// Turn a row that fails column conversion into `None`. Any other error is
/// passed through.
fn skip_malformed<T>(row: rusqlite::Result<T>, entity: &'static str) -> rusqlite::Result<Option<T>> {
    match row {
        Ok(record) => Ok(Some(record)),
        Err(
            err @ (rusqlite::Error::InvalidColumnType(..)
            | rusqlite::Error::FromSqlConversionFailure(..)
            | rusqlite::Error::IntegralValueOutOfRange(..)),
        ) => {
            warn!(entity, error = %err, "skipping malformed row");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn collect_rows<T>(
    rows: impl Iterator<Item = rusqlite::Result<T>>,
    entity: &'static str,
) -> rusqlite::Result<Vec<T>> {
    let mut records = Vec::new();
    for row in rows {
        if let Some(record) = skip_malformed(row, entity)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// First row only; `None` when the query matched nothing.
fn first_row<T>(
    mut rows: impl Iterator<Item = rusqlite::Result<T>>,
    entity: &'static str,
) -> rusqlite::Result<Option<T>> {
    match rows.next() {
        Some(row) => skip_malformed(row, entity),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_failures_are_skipped() {
        let rows = vec![
            Ok(1),
            Err(rusqlite::Error::InvalidColumnType(
                1,
                "title".to_string(),
                rusqlite::types::Type::Null,
            )),
            Ok(3),
        ];
        assert_eq!(collect_rows(rows.into_iter(), "movie").unwrap(), vec![1, 3]);
    }

    #[test]
    fn other_failures_propagate() {
        let rows: Vec<rusqlite::Result<i32>> = vec![Ok(1), Err(rusqlite::Error::InvalidQuery)];
        assert!(collect_rows(rows.into_iter(), "movie").is_err());
    }

    #[test]
    fn first_row_of_nothing_is_none() {
        let rows: Vec<rusqlite::Result<i32>> = Vec::new();
        assert_eq!(first_row(rows.into_iter(), "movie").unwrap(), None);
    }
}
