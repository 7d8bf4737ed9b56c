//! Loading [`AnalysisConfig`] from TOML.
//!
//! Every key is optional; anything left out keeps its default:
//!
//! ```toml
//! reference_year = 2025
//! trend_window_years = 5
//! stable_threshold_percent = 5.0
//! long_window_years = 6
//! short_window_years = 3
//! display_date_format = "%b %-d, %Y"
//! ```

use std::path::Path;

use crime_stats_analytics_models::AnalysisConfig;

use crate::AnalyticsError;

/// Parses and validates a TOML config string.
///
/// # Errors
///
/// Returns [`AnalyticsError::Toml`] if the string is not valid TOML for
/// [`AnalysisConfig`], or [`AnalyticsError::InvalidConfig`] if
/// [`validate`] rejects it.
pub fn from_toml_str(toml_str: &str) -> Result<AnalysisConfig, AnalyticsError> {
    let config: AnalysisConfig = toml::de::from_str(toml_str)?;
    validate(&config)?;
    Ok(config)
}

/// Reads, parses and validates a TOML config file.
///
/// # Errors
///
/// Returns [`AnalyticsError::Io`] if the file cannot be read, otherwise as
/// [`from_toml_str`].
pub fn load(path: &Path) -> Result<AnalysisConfig, AnalyticsError> {
    let contents = std::fs::read_to_string(path)?;
    let config = from_toml_str(&contents)?;
    log::info!("Loaded analysis config from {}", path.display());
    Ok(config)
}

/// Checks that window spans are non-zero and the stability threshold is a
/// finite, non-negative percentage.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidConfig`] describing the first problem
/// found.
pub fn validate(config: &AnalysisConfig) -> Result<(), AnalyticsError> {
    if config.trend_window_years < 2 {
        return Err(invalid(format!(
            "trend_window_years must be at least 2, got {}",
            config.trend_window_years
        )));
    }
    if config.long_window_years == 0 || config.short_window_years == 0 {
        return Err(invalid(format!(
            "fixed windows must span at least one year, got long={} short={}",
            config.long_window_years, config.short_window_years
        )));
    }
    if !config.stable_threshold_percent.is_finite() || config.stable_threshold_percent < 0.0 {
        return Err(invalid(format!(
            "stable_threshold_percent must be a non-negative number, got {}",
            config.stable_threshold_percent
        )));
    }
    if config.display_date_format.is_empty() {
        return Err(invalid("display_date_format must not be empty".to_string()));
    }
    Ok(())
}

const fn invalid(message: String) -> AnalyticsError {
    AnalyticsError::InvalidConfig { message }
}

#[cfg(test)]
mod tests {
    use crime_stats_incident_models::Year;

    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config = from_toml_str("").unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn parses_partial_config() {
        let config = from_toml_str(
            r#"
            reference_year = 2025
            long_window_years = 10
            display_date_format = "%Y-%m-%d"
            "#,
        )
        .unwrap();
        assert_eq!(config.reference_year, Some(Year::new(2025)));
        assert_eq!(config.long_window_years, 10);
        assert_eq!(config.short_window_years, 3);
        assert_eq!(config.display_date_format, "%Y-%m-%d");
    }

    #[test]
    fn rejects_zero_window() {
        let err = from_toml_str("short_window_years = 0").unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidConfig { .. }));
    }

    #[test]
    fn rejects_negative_threshold() {
        let err = from_toml_str("stable_threshold_percent = -1.0").unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidConfig { .. }));
    }

    #[test]
    fn rejects_wrong_types() {
        let err = from_toml_str("reference_year = \"soon\"").unwrap_err();
        assert!(matches!(err, AnalyticsError::Toml(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load(Path::new("/nonexistent/crime_stats.toml")).unwrap_err();
        assert!(matches!(err, AnalyticsError::Io(_)));
    }
}
