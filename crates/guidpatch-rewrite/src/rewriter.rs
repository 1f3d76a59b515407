//! Tree walk and reference substitution.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use regex::Captures;
use tracing::{debug, info, info_span, warn};

use guidpatch_model::{
    GUID_REF, INSTANCE_EXTENSIONS, MATERIAL_EXTENSIONS, ProgressObserver, RemapTables,
    RewriteCounts, SHADER_REF, ScriptRemap, ShaderRemap,
};

use crate::error::{Result, RewriteError};

/// Substitutes script references in scene/prefab text.
///
/// Every embedded-identifier occurrence whose captured token is a key of
/// `scripts` is replaced with `guid: <newGuid>`; every other occurrence
/// is kept verbatim. Returns the patched text and the number of
/// occurrences replaced.
pub fn patch_instance_text<'a>(
    text: &'a str,
    scripts: &BTreeMap<String, ScriptRemap>,
) -> (Cow<'a, str>, usize) {
    let mut replaced = 0usize;
    let patched = GUID_REF.replace_all(text, |caps: &Captures<'_>| match scripts.get(&caps["guid"]) {
        Some(entry) => {
            replaced += 1;
            format!("guid: {}", entry.new_guid)
        }
        None => caps[0].to_string(),
    });
    (patched, replaced)
}

/// Substitutes shader reference blocks in material text.
///
/// A block only matches with its exact two-space indentation and field
/// order. On a table hit the `fileID` and `guid` fields are replaced with
/// the canonical identifier pair; the original `type` capture is
/// preserved unchanged.
pub fn patch_material_text<'a>(
    text: &'a str,
    shaders: &BTreeMap<String, ShaderRemap>,
) -> (Cow<'a, str>, usize) {
    let mut replaced = 0usize;
    let patched = SHADER_REF.replace_all(text, |caps: &Captures<'_>| match shaders.get(&caps["guid"]) {
        Some(entry) => {
            replaced += 1;
            format!(
                "  m_Shader: {{fileID: {}, guid: {}, type: {}}}",
                entry.object_id, entry.asset_guid, &caps["type"]
            )
        }
        None => caps[0].to_string(),
    });
    (patched, replaced)
}

/// Rewrites every cross-reference-bearing file under `root`.
///
/// Depth-first walk with files processed before subdirectories and
/// siblings visited in lexical order, so counts are deterministic for a
/// given tree. Scene/prefab extensions go through script-reference
/// substitution, material extensions through shader-reference
/// substitution; every other file is left untouched. A file is written
/// back only when at least one occurrence was replaced. Per-file read
/// and write failures are logged and abandon that file only.
///
/// # Errors
///
/// Returns [`RewriteError::RootNotFound`] when `root` is not a directory.
pub fn rewrite_tree(
    root: &Path,
    tables: &RemapTables,
    progress: &dyn ProgressObserver,
) -> Result<RewriteCounts> {
    if !root.is_dir() {
        return Err(RewriteError::RootNotFound {
            root: root.to_path_buf(),
        });
    }

    let span = info_span!("rewrite_tree");
    let _guard = span.enter();
    let start = Instant::now();

    let mut counts = RewriteCounts::default();
    // Explicit stack; subdirectories pushed in reverse so pops stay lexical.
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let (files, subdirs) = match list_dir(&dir) {
            Ok(listing) => listing,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "failed to list directory, subtree skipped");
                continue;
            }
        };
        for file in &files {
            progress.file_visited(file);
            let Some(ext) = lowercase_extension(file) else {
                continue;
            };
            if INSTANCE_EXTENSIONS.contains(&ext.as_str()) && !tables.scripts.is_empty() {
                let Some(text) = read_text(file) else {
                    continue;
                };
                let (patched, replaced) = patch_instance_text(&text, &tables.scripts);
                if replaced > 0 && write_text(file, &patched, replaced) {
                    counts.instance_files_changed += 1;
                }
            } else if MATERIAL_EXTENSIONS.contains(&ext.as_str()) && !tables.shaders.is_empty() {
                let Some(text) = read_text(file) else {
                    continue;
                };
                let (patched, replaced) = patch_material_text(&text, &tables.shaders);
                if replaced > 0 && write_text(file, &patched, replaced) {
                    counts.shader_files_changed += 1;
                }
            }
        }
        for subdir in subdirs.into_iter().rev() {
            pending.push(subdir);
        }
    }

    info!(
        instance_files_changed = counts.instance_files_changed,
        shader_files_changed = counts.shader_files_changed,
        duration_ms = start.elapsed().as_millis(),
        "rewrite complete"
    );
    Ok(counts)
}

fn read_text(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(err) => {
            warn!(file = %path.display(), error = %err, "failed to read, file skipped");
            None
        }
    }
}

fn write_text(path: &Path, text: &str, replaced: usize) -> bool {
    if let Err(err) = std::fs::write(path, text.as_bytes()) {
        warn!(file = %path.display(), error = %err, "failed to write, file skipped");
        return false;
    }
    debug!(file = %path.display(), replaced, "references rewritten");
    true
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Lists one directory into files and subdirectories, each sorted by
/// file name.
fn list_dir(dir: &Path) -> std::io::Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    subdirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok((files, subdirs))
}
