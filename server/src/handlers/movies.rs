use axum::{
    extract::{Path, Query, State},
    Json,
};
use flickfinder_core::{defaults, Movie, MovieDao, MovieRating, Person};

use super::{blocking, non_empty};
use crate::error::ApiError;
use crate::params::{
    self, QueryPairs, INVALID_ID, INVALID_LIMIT, INVALID_VOTES, INVALID_YEAR,
};

/// `GET /movies`
pub async fn list_movies(
    State(dao): State<MovieDao>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let limit = params::query_or(&query, "limit", defaults::LIMIT, INVALID_LIMIT)?;
    let movies = blocking(move || dao.list(limit)).await?;
    Ok(Json(movies))
}

/// `GET /movies/{id}`
pub async fn get_movie(
    State(dao): State<MovieDao>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let id: i64 = params::parse(&id, INVALID_ID)?;
    blocking(move || dao.by_id(id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Movie not found"))
}

/// `GET /movies/ratings/{year}`
pub async fn ratings_by_year(
    State(dao): State<MovieDao>,
    Path(year): Path<String>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<Vec<MovieRating>>, ApiError> {
    let year: i32 = params::parse(&year, INVALID_YEAR)?;
    let limit = params::query_or(&query, "limit", defaults::LIMIT, INVALID_LIMIT)?;
    let votes = params::query_or(&query, "votes", defaults::VOTES, INVALID_VOTES)?;
    let ratings = blocking(move || dao.ratings_by_year(limit, votes, year)).await?;
    non_empty(ratings, "No movies found")
}

/// `GET /movies/{id}/stars`
pub async fn stars(
    State(dao): State<MovieDao>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let id: i64 = params::parse(&id, INVALID_ID)?;
    let people = blocking(move || dao.stars(id)).await?;
    non_empty(people, "Movie not found")
}
