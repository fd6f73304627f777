//! Read-only JSON API over the flickfinder movie database.
//!
//! # Overview
//! Seven `GET` endpoints for movies, people, the cast of a movie, the
//! filmography of a person, and the best rated movies of a year. Each
//! handler validates its parameters, makes one DAO call, and answers with
//! JSON or a short plain-text error.
//!
//! # Design
//! - The router state owns one `MovieDao` and one `PersonDao` sharing a
//!   single `Database` handle. Handlers extract just the DAO they need.
//! - `app` builds the router without binding a socket, so tests drive it
//!   with `tower::ServiceExt::oneshot`.
//! - `run_until` stops accepting connections when its shutdown future
//!   resolves and waits for in-flight requests to finish.

pub mod config;
pub mod error;
pub mod handlers;
pub mod params;

use std::future::Future;

use axum::{extract::FromRef, routing::get, Router};
use flickfinder_core::{Database, MovieDao, PersonDao};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use handlers::{movies, people};

pub use config::Config;
pub use error::ApiError;

/// Router state: one DAO per entity group.
#[derive(Debug, Clone)]
pub struct AppState {
    movies: MovieDao,
    people: PersonDao,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            movies: MovieDao::new(db.clone()),
            people: PersonDao::new(db),
        }
    }
}

impl FromRef<AppState> for MovieDao {
    fn from_ref(state: &AppState) -> Self {
        state.movies.clone()
    }
}

impl FromRef<AppState> for PersonDao {
    fn from_ref(state: &AppState) -> Self {
        state.people.clone()
    }
}

pub fn app(db: Database) -> Router {
    Router::new()
        .route("/movies", get(movies::list_movies))
        .route("/movies/{id}", get(movies::get_movie))
        .route("/movies/ratings/{year}", get(movies::ratings_by_year))
        .route("/movies/{id}/stars", get(movies::stars))
        .route("/people", get(people::list_people))
        .route("/people/{id}", get(people::get_person))
        .route("/people/{id}/movies", get(people::movies_starring))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(db))
}

/// Serve until the process exits.
pub async fn run(listener: TcpListener, db: Database) -> Result<(), std::io::Error> {
    run_until(listener, db, std::future::pending()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(
    listener: TcpListener,
    db: Database,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "listening");
    axum::serve(listener, app(db))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server stopped");
    Ok(())
}
