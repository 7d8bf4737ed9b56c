//! Offense summaries for an address.
//!
//! [`top_offenses`] backs the "most common reports" panel; the year/offense
//! [`breakdown_by_year`] backs the drill-down listing.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crime_stats_analytics_models::{OffenseGroup, OffenseShare, YearOffenseGroup};
use crime_stats_incident_models::{IncidentRecord, Year};

/// Returns the `limit` most frequent offenses with their share of all
/// incidents. Ties are broken by description.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn top_offenses(records: &[IncidentRecord], limit: usize) -> Vec<OffenseShare> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for record in records {
        *counts
            .entry(record.highest_nibrs_description.as_str())
            .or_insert(0) += 1;
    }

    let mut sorted: Vec<(&str, u64)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let total = records.len() as f64;

    sorted
        .into_iter()
        .take(limit)
        .map(|(description, count)| OffenseShare {
            description: description.to_string(),
            count,
            percentage: if total > 0.0 {
                count as f64 / total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Groups records by raw year token, then by offense.
///
/// Parseable years come back newest first, followed by any non-numeric
/// tokens in descending string order.
#[must_use]
pub fn breakdown_by_year(records: &[IncidentRecord]) -> Vec<YearOffenseGroup<'_>> {
    let mut grouped: BTreeMap<&str, BTreeMap<&str, Vec<&IncidentRecord>>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.year.as_str())
            .or_default()
            .entry(record.highest_nibrs_description.as_str())
            .or_default()
            .push(record);
    }

    let mut years: Vec<YearOffenseGroup<'_>> = grouped
        .into_iter()
        .map(|(year, offenses)| YearOffenseGroup {
            year: year.to_string(),
            offenses: offenses
                .into_iter()
                .map(|(description, records)| OffenseGroup {
                    description: description.to_string(),
                    records,
                })
                .collect(),
        })
        .collect();

    years.sort_by(|a, b| newest_first(&a.year, &b.year));
    years
}

fn newest_first(a: &str, b: &str) -> Ordering {
    match (a.parse::<Year>(), b.parse::<Year>()) {
        (Ok(a), Ok(b)) => b.cmp(&a),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => b.cmp(a),
    }
}
