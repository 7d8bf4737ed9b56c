//! Address autocomplete over the flat list of known addresses.
//!
//! Prefix matches are preferred; only when nothing starts with the typed
//! text do substring matches come back.

use std::path::Path;

/// Errors from loading an address list.
#[derive(Debug, thiserror::Error)]
pub enum AddressListError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a JSON array of strings.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Known addresses, in the order they were loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressList {
    addresses: Vec<String>,
}

impl AddressList {
    /// Wraps an in-memory list.
    #[must_use]
    pub const fn new(addresses: Vec<String>) -> Self {
        Self { addresses }
    }

    /// Reads a JSON array of address strings from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AddressListError> {
        let path = path.as_ref();
        let list = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        log::info!("Loaded {} addresses from {}", list.len(), path.display());
        Ok(list)
    }

    /// Parses a JSON array of address strings.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a JSON array of strings.
    pub fn from_json_str(raw: &str) -> Result<Self, AddressListError> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }

    /// Addresses starting with `query`, ignoring case; if there are none,
    /// addresses containing it. An empty query matches nothing.
    #[must_use]
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        if query.is_empty() {
            return Vec::new();
        }

        let query = query.to_lowercase();
        let lowered: Vec<(String, &str)> = self
            .addresses
            .iter()
            .map(|a| (a.to_lowercase(), a.as_str()))
            .collect();

        let prefixed: Vec<&str> = lowered
            .iter()
            .filter(|(lower, _)| lower.starts_with(&query))
            .map(|(_, original)| *original)
            .collect();
        if !prefixed.is_empty() {
            return prefixed;
        }

        lowered
            .iter()
            .filter(|(lower, _)| lower.contains(&query))
            .map(|(_, original)| *original)
            .collect()
    }

    /// Number of addresses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
