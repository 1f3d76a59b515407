//! Progress-observer seam.
//!
//! Long-running phases report through this trait at well-defined points.
//! Reporting is advisory only; it has no effect on correctness or
//! ordering, and the core crates never depend on a UI.

use std::path::Path;

/// Callbacks invoked during indexing and the rewrite walk.
pub trait ProgressObserver {
    /// One script asset inspected during the script indexing pass.
    fn script_indexed(&self, _guid: &str, _index: usize, _total: usize) {}

    /// One shader source inspected during the shader indexing pass.
    fn shader_indexed(&self, _path: &Path, _index: usize, _total: usize) {}

    /// One file visited during the rewrite walk.
    fn file_visited(&self, _path: &Path) {}
}

/// Observer that discards every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {}
