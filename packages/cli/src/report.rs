//! Plain-text rendering of address statistics.

use std::fmt::Write as _;

use crime_stats_analytics::{CrimeStatistics, OffenseShare, YearOffenseGroup, format_date};
use crime_stats_incident_models::IncidentRecord;

/// Shown when an address has no incidents at all.
pub const NO_REPORTS: &str = "No crime reports found for this location";

/// Renders the overview: summary, yearly breakdown, most common reports and
/// the incident list.
#[must_use]
pub fn render_overview(
    address: &str,
    stats: &CrimeStatistics,
    top: &[OffenseShare],
    records: &[IncidentRecord],
    date_format: &str,
) -> String {
    let mut out = String::new();
    writeln!(out, "Overview for {address:?}").unwrap();
    writeln!(out).unwrap();

    if records.is_empty() {
        writeln!(out, "{NO_REPORTS}").unwrap();
        return out;
    }

    writeln!(out, "Summary").unwrap();
    writeln!(out, "  Total Incidents: {}", stats.total_incidents).unwrap();
    writeln!(
        out,
        "  Average Per Year: {:.1}",
        stats.average_incidents_per_year
    )
    .unwrap();
    writeln!(out, "  Trend: {}", stats.trend_description).unwrap();
    writeln!(
        out,
        "  6-year trend: {}",
        arrow(stats.is_six_year_trend_increasing)
    )
    .unwrap();
    writeln!(
        out,
        "  3-year trend: {}",
        arrow(stats.is_three_year_trend_increasing)
    )
    .unwrap();

    writeln!(out).unwrap();
    writeln!(out, "Yearly Breakdown").unwrap();
    for (year, count) in &stats.incidents_per_year {
        writeln!(out, "  {year}: {count} incidents").unwrap();
    }

    if !top.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "Most Common Reports").unwrap();
        for offense in top {
            writeln!(
                out,
                "  {:<40} {:>5} {:>6.1}%",
                offense.description, offense.count, offense.percentage
            )
            .unwrap();
        }
    }

    writeln!(out).unwrap();
    writeln!(out, "Incident List").unwrap();
    for record in records {
        writeln!(
            out,
            "  {} ({})",
            record.highest_nibrs_description,
            format_date(&record.date_reported, date_format)
        )
        .unwrap();
    }

    out
}

/// Renders the year → offense drill-down.
#[must_use]
pub fn render_breakdown(groups: &[YearOffenseGroup<'_>], date_format: &str) -> String {
    let mut out = String::new();
    if groups.is_empty() {
        writeln!(out, "{NO_REPORTS}").unwrap();
        return out;
    }

    for group in groups {
        writeln!(out, "{}", group.year).unwrap();
        for offense in &group.offenses {
            writeln!(
                out,
                "  {} (Incidents: {})",
                offense.description,
                offense.count()
            )
            .unwrap();
            for record in &offense.records {
                writeln!(
                    out,
                    "    {} | {} | {}",
                    record.location,
                    format_date(&record.date_reported, date_format),
                    record.location_type_description
                )
                .unwrap();
            }
        }
    }
    out
}

const fn arrow(increasing: bool) -> &'static str {
    if increasing {
        "up (increasing)"
    } else {
        "down (not increasing)"
    }
}
