//! Loading card content from disk.
//!
//! The original toy fetched its CSV over HTTP and, on failure, logged the
//! error and carried on with whatever text it had. [`load_records`] is the
//! strict filesystem analog; [`load_records_or_empty`] reproduces the
//! warn-and-continue behavior for callers that prefer an empty table over a
//! failed startup.

use std::path::Path;

use thiserror::Error;

use super::csv::parse_records;
use super::record::CardRecord;

/// Errors raised while loading card content.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read card contents: {0}")]
    Io(#[from] std::io::Error),
}

/// Load and parse card records from a CSV file.
///
/// Parsing itself never fails; the only error source is reading the file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<CardRecord>, ContentError> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_records(&text))
}

/// Load card records, degrading to an empty list on failure.
///
/// Logs a warning and returns no records when the file cannot be read. The
/// table then simply has nothing to deal, which is the original's failure
/// mode for an unreachable content file.
#[must_use]
pub fn load_records_or_empty(path: impl AsRef<Path>) -> Vec<CardRecord> {
    let path = path.as_ref();
    match load_records(path) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to load card contents");
            Vec::new()
        }
    }
}
