//! Catalog error types.

use std::path::PathBuf;

/// Errors that can occur when reading a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to open or read the catalog file.
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a JSON array of GP records.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The group identifier is not one of the supported groups.
    #[error("unknown catalog group {0:?}")]
    UnknownGroup(String),
}
