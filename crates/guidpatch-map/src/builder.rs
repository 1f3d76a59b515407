//! Remap-table builder.
//!
//! Two independent indexing passes over the exported tree. The script
//! pass correlates catalog script assets with their exported companion
//! metadata by defining type; the shader pass correlates exported shader
//! sources with live shaders by display name.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, error, info, info_span, warn};

use guidpatch_model::{
    AssetCatalog, ExportedLayout, GUID_REF, META_SUFFIX, ProgressObserver, RemapTables,
    SCRIPT_SOURCE_EXT, SHADER_NAME, SHADER_SOURCE_EXT, ScriptRemap, ShaderRemap,
};

/// Builds both remap tables for one run.
///
/// A pass whose conventional folder is absent from `layout` is skipped
/// entirely. Per-asset faults (missing companion metadata, unmatched
/// patterns, unresolved display names, unreadable files) skip the one
/// affected asset and are logged; none aborts a pass.
pub fn build_tables(
    layout: &ExportedLayout,
    catalog: &dyn AssetCatalog,
    progress: &dyn ProgressObserver,
) -> RemapTables {
    let mut tables = RemapTables::new();
    if let Some(scripts_dir) = &layout.scripts_dir {
        index_scripts(scripts_dir, catalog, progress, &mut tables);
    }
    if let Some(shader_dir) = &layout.shader_dir {
        index_shaders(shader_dir, catalog, progress, &mut tables);
    }
    tables
}

/// Appends `.ext` to the full file name, keeping any existing extension.
fn with_appended_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

fn index_scripts(
    scripts_dir: &Path,
    catalog: &dyn AssetCatalog,
    progress: &dyn ProgressObserver,
    tables: &mut RemapTables,
) {
    let span = info_span!("index_scripts");
    let _guard = span.enter();
    let start = Instant::now();

    let guids = catalog.script_guids();
    let total = guids.len();
    for (index, current_guid) in guids.iter().enumerate() {
        progress.script_indexed(current_guid, index, total);

        let Some(asset_path) = catalog.guid_to_path(current_guid) else {
            continue;
        };
        let Some(descriptor) = catalog.script_type_at(&asset_path) else {
            continue;
        };
        if !descriptor.is_component {
            continue;
        }

        let source_file = with_appended_extension(
            &scripts_dir
                .join(&descriptor.assembly)
                .join(descriptor.full_name.replace('.', "/")),
            SCRIPT_SOURCE_EXT,
        );
        let meta_file = with_appended_extension(&source_file, META_SUFFIX);
        if !meta_file.is_file() {
            // Not part of the export, or the naming diverges.
            continue;
        }

        let meta_text = match std::fs::read_to_string(&meta_file) {
            Ok(text) => text,
            Err(err) => {
                warn!(meta = %meta_file.display(), error = %err, "failed to read companion metadata");
                continue;
            }
        };
        let Some(caps) = GUID_REF.captures(&meta_text) else {
            error!(meta = %meta_file.display(), "no embedded identifier in companion metadata");
            continue;
        };
        let embedded = caps["guid"].to_string();
        if embedded.is_empty() || embedded == *current_guid {
            continue;
        }

        debug!(
            class = %descriptor.class_name,
            old_guid = %embedded,
            new_guid = %current_guid,
            source = %source_file.display(),
            "script mapping recorded"
        );
        let entry = ScriptRemap {
            new_guid: current_guid.clone(),
            class_name: descriptor.class_name,
            file_path: source_file,
        };
        if tables.insert_script(embedded.clone(), entry).is_some() {
            warn!(old_guid = %embedded, "duplicate embedded script identifier, keeping last");
        }
    }

    info!(
        mapped = tables.scripts.len(),
        candidates = total,
        duration_ms = start.elapsed().as_millis(),
        "script indexing complete"
    );
}

fn index_shaders(
    shader_dir: &Path,
    catalog: &dyn AssetCatalog,
    progress: &dyn ProgressObserver,
    tables: &mut RemapTables,
) {
    let span = info_span!("index_shaders");
    let _guard = span.enter();
    let start = Instant::now();

    let files = match list_shader_files(shader_dir) {
        Ok(files) => files,
        Err(err) => {
            warn!(dir = %shader_dir.display(), error = %err, "failed to list shader folder");
            return;
        }
    };
    let total = files.len();
    for (index, file) in files.iter().enumerate() {
        progress.shader_indexed(file, index, total);

        let content = match std::fs::read_to_string(file) {
            Ok(text) => text,
            Err(err) => {
                warn!(shader = %file.display(), error = %err, "failed to read shader source");
                continue;
            }
        };
        let meta_file = with_appended_extension(file, META_SUFFIX);
        let meta_text = match std::fs::read_to_string(&meta_file) {
            Ok(text) => text,
            Err(err) => {
                warn!(meta = %meta_file.display(), error = %err, "failed to read companion metadata");
                continue;
            }
        };

        let Some(caps) = GUID_REF.captures(&meta_text) else {
            error!(meta = %meta_file.display(), "no embedded identifier in companion metadata");
            continue;
        };
        let embedded = caps["guid"].to_string();

        let Some(name_caps) = SHADER_NAME.captures(&content) else {
            error!(shader = %file.display(), "no display-name declaration in shader source");
            continue;
        };
        let name = name_caps["name"].to_string();

        let Some(location) = catalog.resolve_shader(&name) else {
            warn!(shader = %name, "could not find shader with name");
            continue;
        };

        debug!(
            old_guid = %embedded,
            shader = %name,
            asset_guid = %location.asset_guid,
            object_id = location.object_id,
            "shader mapping recorded"
        );
        let entry = ShaderRemap {
            asset_guid: location.asset_guid,
            object_id: location.object_id,
            shader_name: name,
        };
        if tables.insert_shader(embedded.clone(), entry).is_some() {
            warn!(old_guid = %embedded, "duplicate embedded shader identifier, keeping last");
        }
    }

    info!(
        mapped = tables.shaders.len(),
        candidates = total,
        duration_ms = start.elapsed().as_millis(),
        "shader indexing complete"
    );
}

/// Lists direct-child shader sources of `dir`, sorted by file name.
fn list_shader_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_shader = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(SHADER_SOURCE_EXT))
            .unwrap_or(false);
        if is_shader {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appended_extension_keeps_existing_one() {
        let source = with_appended_extension(Path::new("Scripts/Game/Player"), "cs");
        assert_eq!(source, PathBuf::from("Scripts/Game/Player.cs"));
        let meta = with_appended_extension(&source, "meta");
        assert_eq!(meta, PathBuf::from("Scripts/Game/Player.cs.meta"));
    }
}
