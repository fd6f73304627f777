use axum::{
    extract::{Path, Query, State},
    Json,
};
use flickfinder_core::{defaults, Movie, Person, PersonDao};

use super::{blocking, non_empty};
use crate::error::ApiError;
use crate::params::{self, QueryPairs, INVALID_ID, INVALID_LIMIT};

/// `GET /people`
pub async fn list_people(
    State(dao): State<PersonDao>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let limit = params::query_or(&query, "limit", defaults::LIMIT, INVALID_LIMIT)?;
    let people = blocking(move || dao.list(limit)).await?;
    Ok(Json(people))
}

/// `GET /people/{id}`
pub async fn get_person(
    State(dao): State<PersonDao>,
    Path(id): Path<String>,
) -> Result<Json<Person>, ApiError> {
    let id: i64 = params::parse(&id, INVALID_ID)?;
    blocking(move || dao.by_id(id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Person not found"))
}

/// `GET /people/{id}/movies`
pub async fn movies_starring(
    State(dao): State<PersonDao>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let id: i64 = params::parse(&id, INVALID_ID)?;
    let movies = blocking(move || dao.movies(id)).await?;
    non_empty(movies, "Movies not found")
}
