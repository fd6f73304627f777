//! Path and query parameter parsing.
//!
//! Values arrive as raw strings so a malformed one can be answered with a
//! parameter-specific 400 instead of the router's generic rejection. Query
//! strings are taken as ordered `key=value` pairs so a repeated key is
//! caught here too.

use std::str::FromStr;

use tracing::debug;

use crate::error::ApiError;

pub const INVALID_ID: &str = "Invalid id parameter";
pub const INVALID_YEAR: &str = "Invalid year parameter";
pub const INVALID_LIMIT: &str = "Invalid limit parameter";
pub const INVALID_VOTES: &str = "Invalid votes parameter";

/// Raw query string pairs in the order they appeared.
pub type QueryPairs = Vec<(String, String)>;

/// Parse a required parameter, answering `invalid` on failure.
pub fn parse<T: FromStr>(raw: &str, invalid: &'static str) -> Result<T, ApiError> {
    raw.parse().map_err(|_| {
        debug!(value = raw, "unparseable parameter");
        ApiError::BadRequest(invalid)
    })
}

/// Parse an optional parameter, falling back to `default` when it is absent.
pub fn parse_or<T: FromStr>(
    raw: Option<&str>,
    default: T,
    invalid: &'static str,
) -> Result<T, ApiError> {
    match raw {
        Some(raw) => parse(raw, invalid),
        None => Ok(default),
    }
}

/// The single value of `key`, if present. A key given more than once is
/// malformed.
pub fn lookup<'a>(
    pairs: &'a [(String, String)],
    key: &str,
    invalid: &'static str,
) -> Result<Option<&'a str>, ApiError> {
    let mut values = pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str());
    let first = values.next();
    if values.next().is_some() {
        debug!(key, "repeated query parameter");
        return Err(ApiError::BadRequest(invalid));
    }
    Ok(first)
}

/// Parse the query parameter `key`, falling back to `default` when absent.
pub fn query_or<T: FromStr>(
    pairs: &[(String, String)],
    key: &str,
    default: T,
    invalid: &'static str,
) -> Result<T, ApiError> {
    parse_or(lookup(pairs, key, invalid)?, default, invalid)
}
