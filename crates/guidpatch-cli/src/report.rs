//! Machine-readable run report.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use serde::Serialize;

use guidpatch_model::{RemapTables, RewriteCounts, ScriptRemap, ShaderRemap};

#[derive(Serialize)]
struct RunReport<'a> {
    script_mappings: &'a BTreeMap<String, ScriptRemap>,
    shader_mappings: &'a BTreeMap<String, ShaderRemap>,
    counts: &'a RewriteCounts,
}

/// Writes the remap tables and rewrite counters as pretty JSON.
///
/// # Errors
///
/// Returns the underlying I/O error when the report cannot be written.
pub fn write_run_report(path: &Path, tables: &RemapTables, counts: &RewriteCounts) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let report = RunReport {
        script_mappings: &tables.scripts,
        shader_mappings: &tables.shaders,
        counts,
    };
    let text = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
    std::fs::write(path, text)
}
