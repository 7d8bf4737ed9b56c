//! Per-year aggregation and trend classification.

use std::collections::BTreeMap;

use chrono::Datelike as _;
use crime_stats_analytics_models::{AnalysisConfig, CrimeStatistics, TrendDirection, YearWindow};
use crime_stats_incident_models::{IncidentRecord, Year};

/// Description used when fewer than two years of data are available.
pub const INSUFFICIENT_DATA: &str = "Insufficient data to determine trend";

/// Outcome of the short-window trend classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortWindowTrend {
    /// Human-readable sentence.
    pub description: String,
    /// Classified direction.
    pub direction: TrendDirection,
    /// Percent change between the window endpoints, if there were two.
    pub percent_change: Option<f64>,
}

/// Analyzes `records` using `config`.
///
/// Never fails: empty or malformed input produces zero counts, a zero
/// average, and an "insufficient data" trend.
#[must_use]
pub fn analyze(records: &[IncidentRecord], config: &AnalysisConfig) -> CrimeStatistics {
    let reference = reference_year(config);

    let incidents_per_year = incidents_per_year(records);
    let total_incidents = incidents_per_year.values().sum();
    let by_year = counts_by_year(&incidents_per_year);

    let average_incidents_per_year = average_per_year(&by_year, reference);
    let trend = short_window_trend(
        &by_year,
        config.trend_window_years,
        config.stable_threshold_percent,
    );

    let long_window = YearWindow::preceding(reference, config.long_window_years);
    let short_window = YearWindow::preceding(reference, config.short_window_years);

    log::debug!(
        "analyze: {total_incidents} incidents over {} year buckets, reference year {reference}",
        incidents_per_year.len()
    );

    CrimeStatistics {
        total_incidents,
        incidents_per_year,
        average_incidents_per_year,
        trend_description: trend.description,
        is_trend_increasing: trend.direction.is_increasing(),
        trend_direction: trend.direction,
        is_six_year_trend_increasing: is_increasing_within(&by_year, long_window),
        is_three_year_trend_increasing: is_increasing_within(&by_year, short_window),
    }
}

/// [`analyze`] with [`AnalysisConfig::default()`].
#[must_use]
pub fn analyze_default(records: &[IncidentRecord]) -> CrimeStatistics {
    analyze(records, &AnalysisConfig::default())
}

/// Resolves the configured reference year, falling back to the current
/// calendar year in UTC.
#[must_use]
pub fn reference_year(config: &AnalysisConfig) -> Year {
    config
        .reference_year
        .unwrap_or_else(|| Year::new(chrono::Utc::now().year()))
}

/// Counts records per raw year token. Non-numeric tokens get their own
/// bucket.
#[must_use]
pub fn incidents_per_year(records: &[IncidentRecord]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.year.clone()).or_insert(0) += 1;
    }
    counts
}

/// Re-keys a raw histogram by parsed [`Year`], dropping tokens that do not
/// parse. Distinct tokens naming the same year are summed.
#[must_use]
pub fn counts_by_year(histogram: &BTreeMap<String, u64>) -> BTreeMap<Year, u64> {
    let mut counts = BTreeMap::new();
    for (token, count) in histogram {
        match token.parse::<Year>() {
            Ok(year) => *counts.entry(year).or_insert(0) += count,
            Err(e) => log::debug!("Skipping year bucket: {e}"),
        }
    }
    counts
}

/// Mean incidents per year, leaving out `partial_year`.
///
/// Returns `0.0` when no other year has data.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_per_year(by_year: &BTreeMap<Year, u64>, partial_year: Year) -> f64 {
    let (total, years) = by_year
        .iter()
        .filter(|(year, count)| **year != partial_year && **count > 0)
        .fold((0_u64, 0_u64), |(total, years), (_, count)| {
            (total + count, years + 1)
        });

    if years == 0 {
        0.0
    } else {
        total as f64 / years as f64
    }
}

/// Percent change from `start` to `end`. A zero start is reported as a
/// 100% change.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percent_change(start: u64, end: u64) -> f64 {
    if start == 0 {
        return 100.0;
    }
    (end as f64 - start as f64) / start as f64 * 100.0
}

/// Classifies the trend across the last `window_years` years of `by_year`,
/// comparing only the first and last of them.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn short_window_trend(
    by_year: &BTreeMap<Year, u64>,
    window_years: usize,
    stable_threshold_percent: f64,
) -> ShortWindowTrend {
    let skip = by_year.len().saturating_sub(window_years);
    let recent: Vec<(Year, u64)> = by_year.iter().skip(skip).map(|(y, c)| (*y, *c)).collect();

    if recent.len() < 2 {
        return insufficient();
    }
    let (first_year, first) = recent[0];
    let (last_year, last) = recent[recent.len() - 1];

    let change = percent_change(first, last);

    if change.abs() < stable_threshold_percent {
        ShortWindowTrend {
            description: format!(
                "Crime incidents have remained relatively stable over the last {} years",
                recent.len()
            ),
            direction: TrendDirection::Stable,
            percent_change: Some(change),
        }
    } else if last > first {
        ShortWindowTrend {
            description: format!(
                "Crime incidents have increased by approximately {}% from {first_year} to {last_year}",
                change as i64
            ),
            direction: TrendDirection::Increasing,
            percent_change: Some(change),
        }
    } else {
        ShortWindowTrend {
            description: format!(
                "Crime incidents have decreased by approximately {}% from {first_year} to {last_year}",
                change.abs() as i64
            ),
            direction: TrendDirection::Decreasing,
            percent_change: Some(change),
        }
    }
}

fn insufficient() -> ShortWindowTrend {
    ShortWindowTrend {
        description: INSUFFICIENT_DATA.to_string(),
        direction: TrendDirection::InsufficientData,
        percent_change: None,
    }
}

/// Whether the count at the latest year inside `window` exceeds the count at
/// the earliest. Years in between are ignored.
#[must_use]
pub fn is_increasing_within(by_year: &BTreeMap<Year, u64>, window: YearWindow) -> bool {
    let mut in_window = by_year.iter().filter(|(year, _)| window.contains(**year));

    let Some((_, first)) = in_window.next() else {
        return false;
    };
    in_window.next_back().is_some_and(|(_, last)| last > first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: &str, offense: &str) -> IncidentRecord {
        IncidentRecord {
            year: year.to_string(),
            location: "100 N TRYON ST".to_string(),
            state: Some("NC".to_string()),
            zip: None,
            date_reported: format!("{year}-01-01T00:00:00.000Z"),
            location_type_description: "Street".to_string(),
            highest_nibrs_description: offense.to_string(),
        }
    }

    fn records(counts: &[(&str, usize)]) -> Vec<IncidentRecord> {
        counts
            .iter()
            .flat_map(|(year, n)| (0..*n).map(|_| record(year, "Simple Assault")))
            .collect()
    }

    fn config_2025() -> AnalysisConfig {
        AnalysisConfig::default().with_reference_year(Year::new(2025))
    }

    #[test]
    fn histogram_sums_to_total() {
        let input = records(&[("2021", 3), ("2022", 4), ("unknown", 2), ("2025", 1)]);
        let stats = analyze(&input, &config_2025());
        assert_eq!(stats.total_incidents, 10);
        assert_eq!(stats.incidents_per_year.values().sum::<u64>(), 10);
        assert_eq!(stats.incidents_per_year["unknown"], 2);
        assert_eq!(stats.incidents_per_year.len(), 4);
    }

    #[test]
    fn empty_input_defaults() {
        let stats = analyze(&[], &config_2025());
        assert_eq!(stats.total_incidents, 0);
        assert!(stats.incidents_per_year.is_empty());
        assert!(stats.average_incidents_per_year.abs() < f64::EPSILON);
        assert_eq!(stats.trend_description, INSUFFICIENT_DATA);
        assert_eq!(stats.trend_direction, TrendDirection::InsufficientData);
        assert!(!stats.is_trend_increasing);
        assert!(!stats.is_six_year_trend_increasing);
        assert!(!stats.is_three_year_trend_increasing);
    }

    #[test]
    fn average_excludes_partial_year() {
        let input = records(&[("2023", 10), ("2024", 10), ("2025", 999)]);
        let stats = analyze(&input, &config_2025());
        assert!((stats.average_incidents_per_year - 10.0).abs() < f64::EPSILON);
        assert_eq!(stats.total_incidents, 1019);
    }

    #[test]
    fn average_ignores_non_numeric_years() {
        let input = records(&[("2022", 4), ("2023", 8), ("N/A", 100)]);
        let stats = analyze(&input, &config_2025());
        assert!((stats.average_incidents_per_year - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn average_is_zero_with_only_partial_year() {
        let input = records(&[("2025", 7)]);
        let stats = analyze(&input, &config_2025());
        assert!(stats.average_incidents_per_year.abs() < f64::EPSILON);
    }

    #[test]
    fn single_year_is_insufficient() {
        let input = records(&[("2024", 12), ("bogus", 3)]);
        let stats = analyze(&input, &config_2025());
        assert_eq!(stats.trend_description, INSUFFICIENT_DATA);
        assert!(!stats.is_trend_increasing);
    }

    #[test]
    fn equal_endpoints_are_stable() {
        let input = records(&[("2020", 100), ("2021", 100)]);
        let stats = analyze(&input, &config_2025());
        assert_eq!(
            stats.trend_description,
            "Crime incidents have remained relatively stable over the last 2 years"
        );
        assert_eq!(stats.trend_direction, TrendDirection::Stable);
        assert!(!stats.is_trend_increasing);
    }

    #[test]
    fn small_decrease_is_stable() {
        let input = records(&[("2020", 100), ("2021", 96)]);
        let stats = analyze(&input, &config_2025());
        assert!(stats.trend_description.contains("remained relatively stable"));
        assert!(!stats.is_trend_increasing);
    }

    #[test]
    fn doubling_is_increase() {
        let input = records(&[("2020", 50), ("2021", 100)]);
        let stats = analyze(&input, &config_2025());
        assert_eq!(
            stats.trend_description,
            "Crime incidents have increased by approximately 100% from 2020 to 2021"
        );
        assert!(stats.is_trend_increasing);
        assert_eq!(stats.trend_direction, TrendDirection::Increasing);
    }

    #[test]
    fn decrease_reports_truncated_magnitude() {
        let input = records(&[("2020", 3), ("2021", 1)]);
        let stats = analyze(&input, &config_2025());
        assert_eq!(
            stats.trend_description,
            "Crime incidents have decreased by approximately 66% from 2020 to 2021"
        );
        assert!(!stats.is_trend_increasing);
        assert_eq!(stats.trend_direction, TrendDirection::Decreasing);
    }

    #[test]
    fn short_window_uses_last_five_years() {
        let input = records(&[
            ("2015", 1),
            ("2018", 10),
            ("2019", 1),
            ("2020", 1),
            ("2021", 1),
            ("2022", 20),
        ]);
        let stats = analyze(&input, &config_2025());
        assert_eq!(
            stats.trend_description,
            "Crime incidents have increased by approximately 100% from 2018 to 2022"
        );
    }

    #[test]
    fn trend_window_is_configurable() {
        let by_year = BTreeMap::from([
            (Year::new(2020), 10),
            (Year::new(2021), 40),
            (Year::new(2022), 20),
        ]);
        let trend = short_window_trend(&by_year, 2, 5.0);
        assert_eq!(trend.direction, TrendDirection::Decreasing);
        assert_eq!(trend.percent_change, Some(-50.0));
        assert!(trend.description.contains("from 2021 to 2022"));
    }

    #[test]
    fn zero_start_counts_as_full_increase() {
        assert!((percent_change(0, 5) - 100.0).abs() < f64::EPSILON);
        assert!((percent_change(4, 5) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn six_year_window_ignores_interior_dips() {
        let input = records(&[
            ("2019", 10),
            ("2020", 50),
            ("2021", 5),
            ("2022", 5),
            ("2023", 5),
            ("2024", 20),
        ]);
        let stats = analyze(&input, &config_2025());
        assert!(stats.is_six_year_trend_increasing);
        assert!(stats.is_three_year_trend_increasing);
    }

    #[test]
    fn fixed_windows_exclude_years_outside_range() {
        let input = records(&[("2018", 1), ("2022", 9), ("2024", 3), ("2025", 50)]);
        let stats = analyze(&input, &config_2025());
        assert!(!stats.is_six_year_trend_increasing);
        assert!(!stats.is_three_year_trend_increasing);
    }

    #[test]
    fn fixed_window_needs_two_years() {
        let by_year = BTreeMap::from([(Year::new(2023), 4), (Year::new(2010), 1)]);
        let window = YearWindow::preceding(Year::new(2025), 3);
        assert!(!is_increasing_within(&by_year, window));
    }

    #[test]
    fn fixed_windows_follow_reference_year() {
        let input = records(&[("2026", 1), ("2028", 5)]);
        let config = AnalysisConfig::default().with_reference_year(Year::new(2029));
        let stats = analyze(&input, &config);
        assert!(stats.is_six_year_trend_increasing);
        assert!(stats.is_three_year_trend_increasing);

        let stats = analyze(&input, &config_2025());
        assert!(!stats.is_six_year_trend_increasing);
    }

    #[test]
    fn year_tokens_naming_same_year_are_merged() {
        let histogram = BTreeMap::from([
            ("2024".to_string(), 2),
            ("+2024".to_string(), 3),
            ("x".to_string(), 9),
        ]);
        let by_year = counts_by_year(&histogram);
        assert_eq!(by_year.len(), 1);
        assert_eq!(by_year[&Year::new(2024)], 5);
    }

    #[test]
    fn statistics_serialize_as_camel_case_json() {
        let input = records(&[("2023", 2), ("2024", 4)]);
        let stats = analyze(&input, &config_2025());

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["totalIncidents"], 6);
        assert_eq!(value["incidentsPerYear"]["2024"], 4);
        assert_eq!(value["trendDirection"], "increasing");
        assert_eq!(value["isTrendIncreasing"], true);
        assert_eq!(value["isSixYearTrendIncreasing"], true);

        let decoded: CrimeStatistics = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, stats);
    }

    #[test]
    fn statistics_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CrimeStatistics>();
        assert_send_sync::<AnalysisConfig>();
    }
}
