//! Input validation primitives.
//!
//! Tokens handed to the rename engine are checked here, before any
//! filesystem access happens.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("static token pattern"))
}

/// Require a string to be non-empty after trimming.
///
/// Returns a reference to the trimmed string on success.
pub fn require_non_empty<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_missing_argument(vec![field.to_string()]))
    } else {
        Ok(trimmed)
    }
}

/// Require a resource token: letters, digits, hyphen and underscore only.
pub fn require_token<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    let trimmed = require_non_empty(value, field)?;
    if token_pattern().is_match(trimmed) {
        Ok(trimmed)
    } else {
        Err(Error::validation_invalid_argument(
            field,
            "Resource names may only contain letters, digits, '-' and '_'",
            Some(trimmed.to_string()),
        ))
    }
}
