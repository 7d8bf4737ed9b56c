//! Shared loading steps for the CLI commands.

use std::path::{Path, PathBuf};

use crime_stats_analytics::{AnalysisConfig, AnalyticsError, config};
use crime_stats_cli_utils::{MultiProgress, spinner};
use crime_stats_incident_models::{IncidentRecord, Year};
use crime_stats_locations::{AddressList, LocationIndex};
use crime_stats_source::{SourceError, filter_by_address, load_records, load_records_for_address};

/// Directory holding the `crime_data_*.json` shards.
pub const DEFAULT_SHARD_DIR: &str = "data/shards";

/// Reference `GeoJSON` dataset of known locations.
pub const DEFAULT_LOCATIONS_PATH: &str = "data/crime_locations.geojson";

/// Flat JSON list of known addresses for autocomplete.
pub const DEFAULT_ADDRESSES_PATH: &str = "data/unique_locations.json";

/// Loads the analysis config, applying a `--reference-year` override.
///
/// # Errors
///
/// Returns [`AnalyticsError`] if the config file cannot be loaded.
pub fn resolve_config(
    path: Option<&Path>,
    reference_year: Option<i32>,
) -> Result<AnalysisConfig, AnalyticsError> {
    let config = match path {
        Some(path) => config::load(path)?,
        None => AnalysisConfig::default(),
    };
    Ok(match reference_year {
        Some(year) => config.with_reference_year(Year::new(year)),
        None => config,
    })
}

/// Loads the incidents at `address`, either from an explicit records file
/// or from the matching shard in `shard_dir`.
///
/// # Errors
///
/// Returns [`SourceError`] if the records cannot be read or decoded.
pub fn address_records(
    multi: &MultiProgress,
    records: Option<&PathBuf>,
    shard_dir: &Path,
    address: &str,
) -> Result<Vec<IncidentRecord>, SourceError> {
    let bar = spinner(multi, &format!("Loading incidents for {address}..."));
    let result = match records {
        Some(path) => load_records(path).map(|all| filter_by_address(all, address)),
        None => load_records_for_address(shard_dir, address),
    };
    bar.finish_and_clear();
    result
}

/// Builds the location index from `path`.
///
/// # Errors
///
/// Returns an error if the dataset cannot be read or parsed.
pub fn location_index(
    multi: &MultiProgress,
    path: &Path,
) -> Result<LocationIndex, crime_stats_locations::LocationIndexError> {
    let bar = spinner(multi, "Indexing known locations...");
    let index = LocationIndex::open(path);
    bar.finish_and_clear();
    index
}

/// Loads the autocomplete address list from `path`.
///
/// # Errors
///
/// Returns an error if the list cannot be read or parsed.
pub fn address_list(
    multi: &MultiProgress,
    path: &Path,
) -> Result<AddressList, crime_stats_locations::AddressListError> {
    let bar = spinner(multi, "Loading known addresses...");
    let list = AddressList::open(path);
    bar.finish_and_clear();
    list
}
