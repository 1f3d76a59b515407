//! Command implementations.

use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use guidpatch_catalog::ProjectManifest;
use guidpatch_map::{build_tables, locate};
use guidpatch_model::{
    GUID_REF, INSTANCE_EXTENSIONS, MATERIAL_EXTENSIONS, META_SUFFIX, NoProgress, ProgressObserver,
    SHADER_NAME, SHADER_REF, SHADER_SOURCE_EXT,
};
use guidpatch_rewrite::rewrite_tree;

use crate::cli::PatchArgs;
use crate::prefs::{Preferences, default_prefs_path};
use crate::progress::ProgressSpinner;
use crate::report::write_run_report;
use crate::summary::apply_table_style;
use crate::types::PatchOutcome;

/// Runs one patch: locate, build the remap tables, rewrite the tree.
///
/// Only configuration faults surface as errors (no usable root, no
/// `Assets` folder, unreadable manifest); per-asset and per-file faults
/// are logged and skipped inside the phases.
pub fn run_patch(args: &PatchArgs) -> Result<PatchOutcome> {
    let span = info_span!("patch");
    let _guard = span.enter();
    let start = Instant::now();

    let prefs_path = args.prefs_file.clone().or_else(default_prefs_path);
    let mut prefs = prefs_path
        .as_deref()
        .map(Preferences::load)
        .unwrap_or_default();

    let export_root = args
        .export_root
        .clone()
        .or_else(|| prefs.last_export_root.clone())
        .context("no export root given and none remembered from a previous run")?;

    let layout = locate(&export_root)
        .with_context(|| format!("locate exported project under {}", export_root.display()))?;

    // The selection was usable; remember it for the next run.
    if !args.no_remember
        && let Some(path) = prefs_path.as_deref()
    {
        prefs.last_export_root = Some(export_root.clone());
        if let Err(err) = prefs.save(path) {
            warn!(prefs = %path.display(), error = %err, "failed to remember export root");
        }
    }

    let catalog = ProjectManifest::load(&args.manifest).context("load project manifest")?;
    info!(
        scripts = catalog.script_count(),
        shaders = catalog.shader_count(),
        "catalog ready"
    );

    let spinner = (!args.no_progress).then(ProgressSpinner::new);
    let progress: &dyn ProgressObserver = match &spinner {
        Some(spinner) => spinner,
        None => &NoProgress,
    };

    let tables = build_tables(&layout, &catalog, progress);
    let counts = rewrite_tree(&layout.assets_root, &tables, progress)
        .context("rewrite exported tree")?;
    if let Some(spinner) = &spinner {
        spinner.finish();
    }

    let report_path = match &args.report {
        Some(path) => {
            write_run_report(path, &tables, &counts)
                .with_context(|| format!("write run report to {}", path.display()))?;
            Some(path.clone())
        }
        None => None,
    };

    info!(
        instance_files_changed = counts.instance_files_changed,
        shader_files_changed = counts.shader_files_changed,
        duration_ms = start.elapsed().as_millis(),
        "patch complete"
    );

    Ok(PatchOutcome {
        export_root,
        scripts_dir_found: layout.scripts_dir.is_some(),
        shader_dir_found: layout.shader_dir.is_some(),
        assets_root: layout.assets_root,
        tables,
        counts,
        report_path,
    })
}

/// Lists the extensions and reference patterns the patcher handles.
pub fn run_patterns() {
    let mut table = Table::new();
    table.set_header(vec!["Target", "Extensions", "Pattern"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        "Scene / prefab references".to_string(),
        dotted(&INSTANCE_EXTENSIONS),
        GUID_REF.as_str().to_string(),
    ]);
    table.add_row(vec![
        "Material shader references".to_string(),
        dotted(&MATERIAL_EXTENSIONS),
        SHADER_REF.as_str().to_string(),
    ]);
    table.add_row(vec![
        "Shader display names".to_string(),
        format!(".{SHADER_SOURCE_EXT}"),
        SHADER_NAME.as_str().to_string(),
    ]);
    table.add_row(vec![
        "Companion metadata".to_string(),
        format!(".{META_SUFFIX}"),
        GUID_REF.as_str().to_string(),
    ]);
    println!("{table}");
}

fn dotted(extensions: &[&str]) -> String {
    let dotted: Vec<String> = extensions.iter().map(|ext| format!(".{ext}")).collect();
    dotted.join(", ")
}
