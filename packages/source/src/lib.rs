#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Raw incident data loading.
//!
//! Reads the incident JSON file into untyped records. Conversion into the
//! typed [`Incident`](crime_watch_incident_models) shape happens in the
//! store, which can skip individual malformed records — a parse failure
//! here means the whole file is unusable, which callers treat the same as
//! a missing file.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur while loading raw incident data.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The data file could not be read.
    #[error("Failed to read incident data: {0}")]
    Io(#[from] std::io::Error),

    /// The data file was not a JSON array of records.
    #[error("Failed to parse incident data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses a JSON document into raw incident records.
///
/// # Errors
///
/// Returns [`SourceError::Json`] if the document is not a JSON array.
pub fn parse_raw_incidents(json: &str) -> Result<Vec<serde_json::Value>, SourceError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads raw incident records from the JSON file at `path`.
///
/// # Errors
///
/// Returns [`SourceError::Io`] if the file cannot be read and
/// [`SourceError::Json`] if its contents are not a JSON array.
pub fn load_raw_incidents(path: &Path) -> Result<Vec<serde_json::Value>, SourceError> {
    let json = std::fs::read_to_string(path)?;
    let records = parse_raw_incidents(&json)?;
    log::debug!("Loaded {} raw records from {}", records.len(), path.display());
    Ok(records)
}
