//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use flickfinder_core::{seed, DataAccessError, Database};
use tracing::info;

/// Runtime configuration for the `flickfinder` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "flickfinder", version, about = "Read-only JSON API over a movie ratings database")]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "FLICKFINDER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Path to the SQLite database file.
    #[arg(long, env = "FLICKFINDER_DATABASE", default_value = "movies.db")]
    pub database: PathBuf,

    /// Create the schema and sample dataset in the database file before
    /// serving.
    #[arg(long)]
    pub seed: bool,
}

impl Config {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Open the configured database read-only, seeding it first if asked.
    pub fn open_database(&self) -> Result<Database, DataAccessError> {
        if self.seed {
            info!(path = %self.database.display(), "seeding database");
            seed::apply(&Database::create(&self.database)?)?;
        }
        Database::open(&self.database)
    }
}
