#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Crime statistics aggregation engine.
//!
//! Turns the incidents recorded at an address into a [`CrimeStatistics`]
//! summary: per-year counts, the average per complete year, a short-window
//! trend over the most recent years, and endpoint comparisons over two fixed
//! windows. Every operation here is pure and total; the only fallible
//! entry points are the config loaders in [`config`].
//!
//! # Usage
//!
//! ```rust
//! use crime_stats_analytics::{AnalysisConfig, analyze};
//! use crime_stats_incident_models::Year;
//!
//! let config = AnalysisConfig::default().with_reference_year(Year::new(2025));
//! let stats = analyze(&[], &config);
//! assert_eq!(stats.total_incidents, 0);
//! assert_eq!(stats.trend_description, "Insufficient data to determine trend");
//! ```

pub mod config;
pub mod dates;
pub mod offenses;
pub mod stats;

use thiserror::Error;

pub use crime_stats_analytics_models::{
    AnalysisConfig, CrimeStatistics, DISPLAY_DATE_FORMAT, OffenseGroup, OffenseShare,
    TrendDirection, YearOffenseGroup, YearWindow,
};
pub use dates::{format_date, format_display_date};
pub use offenses::{breakdown_by_year, top_offenses};
pub use stats::{analyze, analyze_default};

/// Errors that can occur while loading analysis configuration.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Reading the config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`AnalysisConfig`].
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The config parsed but holds unusable values.
    #[error("Invalid config: {message}")]
    InvalidConfig {
        /// Description of what went wrong.
        message: String,
    },
}
