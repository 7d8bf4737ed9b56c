#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Street-name location index and address autocomplete.
//!
//! The [`LocationIndex`] is built once from the reference `GeoJSON`
//! dataset of known incident locations and is read-only afterwards, so a
//! single instance can be shared across threads by reference.
//!
//! # Usage
//!
//! ```rust
//! use crime_stats_locations::LocationIndex;
//!
//! let raw = r#"{
//!     "type": "FeatureCollection",
//!     "features": [{
//!         "type": "Feature",
//!         "geometry": null,
//!         "properties": {"LOCATION": "100 N TRYON ST", "CITY": "CHARLOTTE", "STATE": "NC"}
//!     }]
//! }"#;
//! let index = LocationIndex::from_geojson_str(raw).unwrap();
//! let hits = index.search("tryon");
//! assert_eq!(hits[0].formatted_address(), "100 N TRYON ST, CHARLOTTE, NC");
//! ```

pub mod street;
pub mod suggest;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::str::FromStr;

use geojson::{Feature, GeoJson};

pub use crime_stats_location_models::CrimeLocation;
pub use street::{street_name, street_name_or_location};
pub use suggest::{AddressList, AddressListError};

/// Errors from loading the reference location dataset.
#[derive(Debug, thiserror::Error)]
pub enum LocationIndexError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid `GeoJSON`.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] Box<geojson::Error>),

    /// The document is `GeoJSON`, but not a `FeatureCollection`.
    #[error("Expected a GeoJSON FeatureCollection")]
    NotFeatureCollection,
}

/// De-duplicated set of known locations, searchable by street name.
#[derive(Debug, Clone, Default)]
pub struct LocationIndex {
    /// Unique locations in dataset order.
    locations: Vec<CrimeLocation>,
    /// street name -> position in `locations`
    by_street: BTreeMap<String, usize>,
}

impl LocationIndex {
    /// Reads and indexes a `GeoJSON` `FeatureCollection` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a
    /// `FeatureCollection`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LocationIndexError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let index = Self::from_geojson_str(&raw)?;
        log::info!(
            "Loaded {} unique locations from {}",
            index.len(),
            path.display()
        );
        Ok(index)
    }

    /// Indexes a `GeoJSON` `FeatureCollection` document.
    ///
    /// Features missing a string `LOCATION`, `CITY` or `STATE` property are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not valid `GeoJSON` or is not a
    /// `FeatureCollection`.
    pub fn from_geojson_str(raw: &str) -> Result<Self, LocationIndexError> {
        match GeoJson::from_str(raw).map_err(Box::new)? {
            GeoJson::FeatureCollection(collection) => Ok(Self::from_features(&collection.features)),
            GeoJson::Feature(_) | GeoJson::Geometry(_) => {
                Err(LocationIndexError::NotFeatureCollection)
            }
        }
    }

    /// Indexes already-parsed features. The first feature seen for a given
    /// `LOCATION` wins.
    #[must_use]
    pub fn from_features<'a>(features: impl IntoIterator<Item = &'a Feature>) -> Self {
        let mut index = Self::default();
        let mut seen = BTreeSet::new();
        let mut skipped = 0_usize;

        for feature in features {
            let Some(location) = location_from_feature(feature) else {
                skipped += 1;
                continue;
            };
            if !seen.insert(location.location.clone()) {
                continue;
            }

            if let Some(street) = street::street_name(&location.location) {
                index
                    .by_street
                    .insert(street.to_string(), index.locations.len());
            }
            index.locations.push(location);
        }

        if skipped > 0 {
            log::debug!("Skipped {skipped} features missing LOCATION/CITY/STATE");
        }

        index
    }

    /// Locations whose street name contains `query`, ignoring case.
    ///
    /// Returns at most one location per street name (the first in dataset
    /// order). An empty query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&CrimeLocation> {
        if query.is_empty() {
            return Vec::new();
        }

        let query = query.to_lowercase();
        let mut matched_streets = BTreeSet::new();
        let mut results = Vec::new();

        for location in &self.locations {
            let Some(street) = street::street_name(&location.location) else {
                continue;
            };
            if street.to_lowercase().contains(&query) && matched_streets.insert(street) {
                results.push(location);
            }
        }

        results
    }

    /// Street name of `location` for display, or the full location when no
    /// street name can be derived.
    #[must_use]
    pub fn street_name_for_display(location: &CrimeLocation) -> String {
        street::street_name_or_location(&location.location).to_string()
    }

    /// Location indexed under exactly this street name. When several
    /// locations share a street, the last one loaded is returned.
    #[must_use]
    pub fn lookup_street(&self, street: &str) -> Option<&CrimeLocation> {
        self.by_street
            .get(street)
            .and_then(|&idx| self.locations.get(idx))
    }

    /// Number of unique locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the index holds no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterates unique locations in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &CrimeLocation> {
        self.locations.iter()
    }
}

impl<'a> IntoIterator for &'a LocationIndex {
    type Item = &'a CrimeLocation;
    type IntoIter = std::slice::Iter<'a, CrimeLocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.iter()
    }
}

fn location_from_feature(feature: &Feature) -> Option<CrimeLocation> {
    let text = |key: &str| {
        feature
            .property(key)
            .and_then(|v| v.as_str())
            .map(ToString::to_string)
    };

    Some(CrimeLocation {
        location: text("LOCATION")?,
        city: text("CITY")?,
        state: text("STATE")?,
    })
}
