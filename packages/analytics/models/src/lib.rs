#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Crime statistics result types and analysis configuration.
//!
//! Everything here is plain data: the [`CrimeStatistics`] produced for an
//! address, the offense summaries shown alongside it, and the
//! [`AnalysisConfig`] that pins down which years count as "recent".

use std::collections::BTreeMap;

use crime_stats_incident_models::{IncidentRecord, Year};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Default display pattern for report dates (`MMM d, yyyy`).
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Direction of the short-window trend.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TrendDirection {
    /// Latest count exceeds the earliest by at least the stability threshold.
    Increasing,
    /// Latest count is below the earliest by at least the stability threshold.
    Decreasing,
    /// Change between the endpoints is under the stability threshold.
    Stable,
    /// Fewer than two usable years.
    InsufficientData,
}

impl TrendDirection {
    /// Whether this direction counts as an increase.
    #[must_use]
    pub const fn is_increasing(self) -> bool {
        matches!(self, Self::Increasing)
    }
}

/// Aggregated statistics for the incidents at one address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeStatistics {
    /// Number of incidents analyzed.
    pub total_incidents: u64,
    /// Incident count keyed by the raw year token.
    pub incidents_per_year: BTreeMap<String, u64>,
    /// Mean incidents per complete year.
    pub average_incidents_per_year: f64,
    /// Human-readable short-window trend.
    pub trend_description: String,
    /// Whether the short-window trend is increasing.
    pub is_trend_increasing: bool,
    /// Classified short-window trend.
    pub trend_direction: TrendDirection,
    /// Endpoint comparison over the six-year window.
    pub is_six_year_trend_increasing: bool,
    /// Endpoint comparison over the three-year window.
    pub is_three_year_trend_increasing: bool,
}

/// A closed range of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearWindow {
    /// First year in the window.
    pub start: Year,
    /// Last year in the window.
    pub end: Year,
}

impl YearWindow {
    /// The `span` complete years immediately preceding `reference`.
    ///
    /// A `span` of zero yields an empty window.
    #[must_use]
    pub const fn preceding(reference: Year, span: u32) -> Self {
        Self {
            start: reference.years_before(span),
            end: reference.years_before(1),
        }
    }

    /// Whether `year` falls inside the window.
    #[must_use]
    pub fn contains(&self, year: Year) -> bool {
        self.start <= year && year <= self.end
    }
}

/// Tunables for [`CrimeStatistics`] computation.
///
/// Deserializes from TOML with every key optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// The year considered "now". Its own data is treated as incomplete and
    /// left out of the average. `None` means the current calendar year.
    pub reference_year: Option<Year>,
    /// Number of most recent years the short-window trend looks at.
    pub trend_window_years: usize,
    /// Percent change below which a trend is reported as stable.
    pub stable_threshold_percent: f64,
    /// Span of the long fixed window (six years by default).
    pub long_window_years: u32,
    /// Span of the short fixed window (three years by default).
    pub short_window_years: u32,
    /// chrono strftime pattern used for displaying report dates.
    pub display_date_format: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reference_year: None,
            trend_window_years: 5,
            stable_threshold_percent: 5.0,
            long_window_years: 6,
            short_window_years: 3,
            display_date_format: DISPLAY_DATE_FORMAT.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Returns a copy pinned to the given reference year.
    #[must_use]
    pub fn with_reference_year(mut self, year: Year) -> Self {
        self.reference_year = Some(year);
        self
    }
}

/// Share of all incidents attributed to one offense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffenseShare {
    /// Offense description (NIBRS).
    pub description: String,
    /// Incidents with this offense.
    pub count: u64,
    /// `count` as a percentage of all incidents.
    pub percentage: f64,
}

/// Incidents of one offense within a single year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffenseGroup<'a> {
    /// Offense description (NIBRS).
    pub description: String,
    /// The incidents themselves, in input order.
    pub records: Vec<&'a IncidentRecord>,
}

impl OffenseGroup<'_> {
    /// Number of incidents in the group.
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

/// Incidents for one raw year token, split by offense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearOffenseGroup<'a> {
    /// Raw year token.
    pub year: String,
    /// Offense groups, sorted by description.
    pub offenses: Vec<OffenseGroup<'a>>,
}
