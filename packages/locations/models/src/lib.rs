#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Reference location types for address lookup.

use serde::{Deserialize, Serialize};

/// A known incident location from the reference dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeLocation {
    /// Block address as recorded (e.g. `"100 N TRYON ST"`).
    pub location: String,
    /// City name.
    pub city: String,
    /// State abbreviation.
    pub state: String,
}

impl CrimeLocation {
    /// One-line address, `"{location}, {city}, {state}"`.
    #[must_use]
    pub fn formatted_address(&self) -> String {
        format!("{}, {}, {}", self.location, self.city, self.state)
    }
}
