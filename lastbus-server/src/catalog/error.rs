//! Catalog loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading the stand catalog or language pack.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON did not match the expected shape
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Catalog content is well-formed but unusable
    #[error("invalid catalog: {message}")]
    Invalid { message: String },
}
