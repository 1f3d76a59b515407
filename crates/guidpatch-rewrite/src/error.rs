//! Error types for the rewrite walk.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal faults detected before the walk starts.
///
/// Per-file read and write failures during the walk are not represented
/// here; they abandon the one affected file and the walk continues.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The rewrite root is not an existing directory.
    #[error("rewrite root is not a directory: {root}")]
    RootNotFound {
        /// Root that was checked.
        root: PathBuf,
    },
}

/// Result alias for rewrite operations.
pub type Result<T> = std::result::Result<T, RewriteError>;
