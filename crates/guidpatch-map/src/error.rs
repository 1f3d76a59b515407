//! Error types for exported-tree location.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal configuration faults detected while locating the exported tree.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The chosen export root has no `Assets` folder.
    #[error("Assets folder not found under {root}")]
    AssetsMissing {
        /// Export root that was checked.
        root: PathBuf,
    },
}

/// Result alias for location operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
