//! HTTP error mapping.
//!
//! # Design
//! Client mistakes and missing resources carry a short fixed message that
//! is returned verbatim. Store failures are logged with their cause and
//! collapse to a generic 500 so internal details never reach the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use flickfinder_core::DataAccessError;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{debug, error};

/// Body returned with every 500.
pub const DATABASE_ERROR: &str = "Database error";

/// Errors a handler can end in.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A path or query parameter was not a valid integer.
    #[error("{0}")]
    BadRequest(&'static str),

    /// The entity does not exist, or the collection query matched nothing.
    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Database(#[from] DataAccessError),

    /// The blocking task running the query panicked or was cancelled.
    #[error("query task failed: {0}")]
    Task(#[from] JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                debug!(reason = message, "rejected request parameter");
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            err @ (ApiError::Database(_) | ApiError::Task(_)) => {
                error!(error = %err, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, DATABASE_ERROR).into_response()
            }
        }
    }
}
