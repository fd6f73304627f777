//! Values applied when a caller omits an optional query parameter.

/// Maximum number of rows returned by collection queries.
pub const LIMIT: u32 = 50;

/// Ratings queries only include movies with strictly more votes than this.
pub const VOTES: u32 = 1000;
