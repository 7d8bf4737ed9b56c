//! Naming of per-letter incident shards.
//!
//! Incident data is published as one JSON file per leading address
//! character (`crime_data_a.json`, `crime_data_b.json`, ...). These helpers
//! only build names and URLs; fetching is left to the caller.

use crate::SourceError;

/// Shard key for `address`: its first character, lowercased.
#[must_use]
pub fn shard_key(address: &str) -> Option<char> {
    address.chars().next()?.to_lowercase().next()
}

/// Shard file name for `address` (e.g. `crime_data_m.json`).
///
/// # Errors
///
/// Returns [`SourceError::EmptyAddress`] if `address` is empty.
pub fn shard_file_name(address: &str) -> Result<String, SourceError> {
    let key = shard_key(address).ok_or(SourceError::EmptyAddress)?;
    Ok(format!("crime_data_{key}.json"))
}

/// Full shard URL under `base_url`.
///
/// # Errors
///
/// Returns [`SourceError::EmptyAddress`] if `address` is empty.
pub fn shard_url(base_url: &str, address: &str) -> Result<String, SourceError> {
    let file_name = shard_file_name(address)?;
    Ok(format!("{}/{file_name}", base_url.trim_end_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_first_character() {
        assert_eq!(shard_key("Monroe Rd"), Some('m'));
        assert_eq!(shard_key("100 N TRYON ST"), Some('1'));
        assert_eq!(shard_key(""), None);
    }

    #[test]
    fn builds_file_name_and_url() {
        assert_eq!(shard_file_name("TRYON").unwrap(), "crime_data_t.json");
        assert_eq!(
            shard_url("https://example.org/data/", "tryon").unwrap(),
            "https://example.org/data/crime_data_t.json"
        );
    }

    #[test]
    fn empty_address_has_no_shard() {
        assert!(matches!(
            shard_file_name(""),
            Err(SourceError::EmptyAddress)
        ));
    }
}
