//! Stand catalog lookup.

use std::collections::HashSet;
use std::path::Path;

use crate::domain::{Stand, StandCode};

use super::error::CatalogError;

/// The static list of bus stands, in catalog order.
///
/// Lookups are case-insensitive on the stand's `value`. A stand that is not
/// in the catalog is a normal `None`, not an error.
#[derive(Debug, Clone)]
pub struct StandDirectory {
    stands: Vec<Stand>,
}

impl StandDirectory {
    /// Build a directory from catalog entries.
    ///
    /// Fails if an entry's value is not a usable stand code or if two entries
    /// differ only in case.
    pub fn new(stands: Vec<Stand>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for stand in &stands {
            stand.code().map_err(|e| CatalogError::Invalid {
                message: format!("stand {:?}: {}", stand.value, e),
            })?;
            if !seen.insert(stand.value.to_ascii_lowercase()) {
                return Err(CatalogError::Invalid {
                    message: format!("duplicate stand {}", stand.value),
                });
            }
        }

        Ok(Self { stands })
    }

    /// Parse a directory from the catalog JSON (`[{"value", "label"}]`).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let stands: Vec<Stand> = serde_json::from_str(json).map_err(|e| CatalogError::Json {
            message: e.to_string(),
        })?;
        Self::new(stands)
    }

    /// Read the catalog from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// All stands, in catalog order.
    pub fn stands(&self) -> &[Stand] {
        &self.stands
    }

    /// Look up a stand by identifier, ignoring case.
    pub fn get(&self, id: &str) -> Option<&Stand> {
        self.stands
            .iter()
            .find(|s| s.value.eq_ignore_ascii_case(id))
    }

    /// Check whether a stand exists, ignoring case.
    pub fn exists(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Resolve an identifier to the catalog's canonical stand code.
    ///
    /// The returned code uses the catalog's spelling, so `"TRICHY"` resolves
    /// to the code `trichy` if that is how the catalog lists it.
    pub fn resolve(&self, id: &str) -> Option<StandCode> {
        self.get(id).and_then(|s| s.code().ok())
    }

    /// Canonical codes for every stand.
    pub fn codes(&self) -> Vec<StandCode> {
        self.stands.iter().filter_map(|s| s.code().ok()).collect()
    }

    /// Get the number of stands in the catalog.
    pub fn len(&self) -> usize {
        self.stands.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.stands.is_empty()
    }
}
