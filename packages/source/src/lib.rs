#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Incident record source helpers.
//!
//! Decodes the published per-letter incident shards into
//! [`IncidentRecord`]s and narrows them down to the records at a searched
//! address before they reach the statistics engine. Transport is up to the
//! caller; this crate only reads payloads that are already local.

pub mod decode;
pub mod shard;

use std::path::Path;

use crime_stats_incident_models::IncidentRecord;

pub use decode::decode_records;
pub use shard::{shard_file_name, shard_key, shard_url};

/// Errors that can occur while reading incident data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error (file read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload was an HTML page, typically an error page served in
    /// place of the data file.
    #[error("Received HTML instead of JSON data")]
    HtmlResponse,

    /// The searched address was empty.
    #[error("Address is empty")]
    EmptyAddress,
}

/// Keeps the records whose location contains `address`, ignoring case.
#[must_use]
pub fn filter_by_address(records: Vec<IncidentRecord>, address: &str) -> Vec<IncidentRecord> {
    let needle = address.to_uppercase();
    records
        .into_iter()
        .filter(|record| record.location.to_uppercase().contains(&needle))
        .collect()
}

/// Reads and decodes an incident shard file.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be read or decoded.
pub fn load_records(path: &Path) -> Result<Vec<IncidentRecord>, SourceError> {
    let body = std::fs::read(path)?;
    let records = decode_records(&body)?;
    log::info!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Loads the records at `address` from the matching shard inside
/// `shard_dir`.
///
/// # Errors
///
/// Returns [`SourceError::EmptyAddress`] for an empty address, otherwise as
/// [`load_records`].
pub fn load_records_for_address(
    shard_dir: &Path,
    address: &str,
) -> Result<Vec<IncidentRecord>, SourceError> {
    let path = shard_dir.join(shard_file_name(address)?);
    let records = filter_by_address(load_records(&path)?, address);
    log::info!("Found {} matching records for {address:?}", records.len());
    Ok(records)
}
