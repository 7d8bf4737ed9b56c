#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Incident record and calendar year types.
//!
//! [`IncidentRecord`] is the decoded shape of one reported incident as it
//! arrives from the upstream data shards. Records are treated as immutable
//! once decoded. [`Year`] is the validated form of a record's `YEAR` token
//! and is what every year-based aggregation operates on.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One reported crime incident tied to a location and a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct IncidentRecord {
    /// Year token as reported upstream. Usually a four-digit year, but not
    /// guaranteed to be numeric.
    pub year: String,
    /// Free-text block address (e.g. `"100 N TRYON ST"`).
    pub location: String,
    /// State abbreviation, when present.
    #[serde(default)]
    pub state: Option<String>,
    /// ZIP code, when present.
    #[serde(default)]
    pub zip: Option<String>,
    /// Report timestamp in `yyyy-MM-dd'T'HH:mm:ss.SSS'Z'` form.
    pub date_reported: String,
    /// Kind of place the incident occurred at (e.g. `"Residence/Home"`).
    pub location_type_description: String,
    /// Highest-ranked NIBRS offense for the incident.
    pub highest_nibrs_description: String,
}

impl IncidentRecord {
    /// Parses this record's year token.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidYearError`] if the token is not an integer.
    pub fn parsed_year(&self) -> Result<Year, InvalidYearError> {
        self.year.parse()
    }
}

/// A validated calendar year.
///
/// Only constructible from a raw token through [`FromStr`] (or
/// [`Year::new`] for known-good values), so anything holding a `Year` has
/// already survived parsing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    /// Wraps a known calendar year.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the numeric year.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Returns the year `years` before this one.
    #[must_use]
    pub const fn years_before(self, years: u32) -> Self {
        Self(self.0.saturating_sub_unsigned(years))
    }
}

impl FromStr for Year {
    type Err = InvalidYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>().map(Self).map_err(|_| InvalidYearError {
            value: s.to_string(),
        })
    }
}

impl TryFrom<&str> for Year {
    type Error = InvalidYearError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a year token cannot be parsed into a [`Year`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidYearError {
    /// The token that failed to parse.
    pub value: String,
}

impl std::fmt::Display for InvalidYearError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid year {:?}: expected an integer", self.value)
    }
}

impl std::error::Error for InvalidYearError {}
