//! Record types returned by the DAOs and serialized by the server.
//!
//! # Design
//! Records are built fresh from each result row and handed out by value.
//! The `set_*` methods exist for test fixtures; nothing on the serving path
//! mutates a record after construction.
//!
//! `MovieRating` embeds a `Movie` instead of repeating its fields. The
//! embedded movie is flattened on the wire, so JSON clients see
//! `id`, `title`, `year`, `rating` and `votes` side by side.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    id: i64,
    title: String,
    year: i32,
}

impl Movie {
    pub fn new(id: i64, title: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            year,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Movie [id={}, title={}, year={}]",
            self.id, self.title, self.year
        )
    }
}

/// A row from the `people` table. `birth` is the birth year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    id: i64,
    name: String,
    birth: i32,
}

impl Person {
    pub fn new(id: i64, name: impl Into<String>, birth: i32) -> Self {
        Self {
            id,
            name: name.into(),
            birth,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth(&self) -> i32 {
        self.birth
    }

    pub fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_birth(&mut self, birth: i32) {
        self.birth = birth;
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person [id={}, name={}, birth={}]",
            self.id, self.name, self.birth
        )
    }
}

/// A movie joined with its row from the `ratings` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRating {
    #[serde(flatten)]
    movie: Movie,
    rating: f64,
    votes: i64,
}

impl MovieRating {
    pub fn new(id: i64, title: impl Into<String>, year: i32, rating: f64, votes: i64) -> Self {
        Self::from_movie(Movie::new(id, title, year), rating, votes)
    }

    pub fn from_movie(movie: Movie, rating: f64, votes: i64) -> Self {
        Self {
            movie,
            rating,
            votes,
        }
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    /// Mutable access to the embedded movie, for fixtures that need to
    /// change `id`, `title` or `year`.
    pub fn movie_mut(&mut self) -> &mut Movie {
        &mut self.movie
    }

    pub fn id(&self) -> i64 {
        self.movie.id
    }

    pub fn title(&self) -> &str {
        &self.movie.title
    }

    pub fn year(&self) -> i32 {
        self.movie.year
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn votes(&self) -> i64 {
        self.votes
    }

    pub fn set_rating(&mut self, rating: f64) {
        self.rating = rating;
    }

    pub fn set_votes(&mut self, votes: i64) {
        self.votes = votes;
    }
}

impl fmt::Display for MovieRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MovieRating [id={}, title={}, year={}, rating={:.2}, votes={}]",
            self.movie.id, self.movie.title, self.movie.year, self.rating, self.votes
        )
    }
}
