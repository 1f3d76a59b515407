//! Result types for CLI commands.

use std::path::PathBuf;

use guidpatch_model::{RemapTables, RewriteCounts};

/// Outcome of one patch run, consumed by the summary printer and the
/// optional JSON report.
#[derive(Debug)]
pub struct PatchOutcome {
    /// Export root the run operated on.
    pub export_root: PathBuf,
    /// The `Assets` directory that was walked.
    pub assets_root: PathBuf,
    /// Whether the conventional `Scripts` folder was found.
    pub scripts_dir_found: bool,
    /// Whether the conventional `Shader` folder was found.
    pub shader_dir_found: bool,
    /// The remap tables built for this run.
    pub tables: RemapTables,
    /// Files rewritten per category.
    pub counts: RewriteCounts,
    /// Where the JSON run report was written, when requested.
    pub report_path: Option<PathBuf>,
}
