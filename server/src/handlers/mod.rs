//! Request handlers.
//!
//! Every handler validates its parameters, performs exactly one DAO call on
//! the blocking thread pool, and writes exactly one response.

pub mod movies;
pub mod people;

use axum::Json;
use flickfinder_core::DataAccessError;

use crate::error::ApiError;

/// Run a synchronous DAO call without stalling the async workers.
async fn blocking<T, F>(query: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, DataAccessError> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(query).await??)
}

/// Empty collections are answered the same way as a missing entity.
fn non_empty<T>(records: Vec<T>, not_found: &'static str) -> Result<Json<Vec<T>>, ApiError> {
    if records.is_empty() {
        return Err(ApiError::NotFound(not_found));
    }
    Ok(Json(records))
}
