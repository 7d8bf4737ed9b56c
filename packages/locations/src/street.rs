//! Street-name derivation for block addresses.
//!
//! The street name is the address with its leading house number removed:
//! `"100 N TRYON ST"` becomes `"N TRYON ST"`. It is the key used for
//! autocomplete matching and deduplication of search results.

use regex::Regex;
use std::sync::LazyLock;

/// Leading house number followed by at least one whitespace character.
static HOUSE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s+").expect("valid regex"));

/// Returns `location` without its leading house number.
///
/// Returns `None` if nothing is left once the number is stripped. An
/// address without a leading number is its own street name.
#[must_use]
pub fn street_name(location: &str) -> Option<&str> {
    let rest = HOUSE_NUMBER_RE
        .find(location)
        .map_or(location, |m| &location[m.end()..]);

    if rest.is_empty() { None } else { Some(rest) }
}

/// Street name for display, falling back to the full location when no
/// street name can be derived.
#[must_use]
pub fn street_name_or_location(location: &str) -> &str {
    street_name(location).unwrap_or(location)
}
