//! Error types for manifest loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading a project manifest.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The manifest file does not exist.
    #[error("manifest not found: {path}")]
    ManifestNotFound {
        /// Path that was checked.
        path: PathBuf,
    },

    /// The manifest file could not be read.
    #[error("failed to read manifest {path}")]
    ManifestRead {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The manifest file is not valid JSON for the expected document.
    #[error("failed to parse manifest {path}")]
    ManifestParse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
