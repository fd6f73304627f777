//! Read-only data access for the flickfinder movie dataset.
//!
//! # Overview
//! Wraps a SQLite database holding four tables (`movies`, `people`,
//! `ratings`, `stars`) and exposes typed read operations grouped per entity:
//! `MovieDao` for movies and their ratings/cast, `PersonDao` for people and
//! their filmography.
//!
//! # Design
//! - `Database` is an explicit handle passed to each DAO at construction
//!   time. Clones share one connection, so the server creates it once and
//!   tests create a fresh in-memory instance per case.
//! - Every operation returns `Result<_, DataAccessError>`. "Not found" is
//!   `Ok(None)` or an empty `Vec`, never an error.
//! - Operations are synchronous. Async callers move them onto a blocking
//!   thread.

pub mod dao;
pub mod db;
pub mod defaults;
pub mod error;
pub mod seed;
pub mod types;

pub use dao::{MovieDao, PersonDao};
pub use db::Database;
pub use error::DataAccessError;
pub use types::{Movie, MovieRating, Person};
