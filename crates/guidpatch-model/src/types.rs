//! Remap records, remap tables, and exported-tree layout.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Directory every exported project carries at its root.
pub const ASSETS_DIR_NAME: &str = "Assets";
/// Conventional subfolder holding recovered script sources.
pub const SCRIPTS_DIR_NAME: &str = "Scripts";
/// Conventional subfolder holding recovered shader sources.
pub const SHADER_DIR_NAME: &str = "Shader";

/// Extension of recovered script source files.
pub const SCRIPT_SOURCE_EXT: &str = "cs";
/// Extension of recovered shader source files.
pub const SHADER_SOURCE_EXT: &str = "shader";
/// Suffix appended to an asset path to form its companion metadata file.
pub const META_SUFFIX: &str = "meta";

/// Extensions rewritten through script-reference substitution.
pub const INSTANCE_EXTENSIONS: [&str; 2] = ["prefab", "unity"];
/// Extensions rewritten through shader-reference substitution.
pub const MATERIAL_EXTENSIONS: [&str; 2] = ["mat", "material"];

/// Replacement data for one script whose exported identifier diverged
/// from the identifier the host catalog assigned on import.
///
/// Keyed in [`RemapTables::scripts`] by the old (embedded) identifier.
/// `class_name` and `file_path` are diagnostic only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRemap {
    /// Identifier the host catalog currently assigns to the script.
    pub new_guid: String,
    /// Defining type of the script.
    pub class_name: String,
    /// Exported source file the mapping was derived from.
    pub file_path: PathBuf,
}

/// Replacement data for one shader reference, keyed in
/// [`RemapTables::shaders`] by the old (embedded) identifier.
///
/// `asset_guid` and `object_id` form the canonical identifier pair of the
/// live shader the display name resolved to. `shader_name` is diagnostic
/// only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderRemap {
    /// Asset identifier of the resolved shader.
    pub asset_guid: String,
    /// Sub-object identifier of the resolved shader within its asset.
    pub object_id: u64,
    /// Display name the shader was resolved by.
    pub shader_name: String,
}

/// The two old-identifier lookup tables consumed by the rewriter.
///
/// Script and shader identifier spaces are independent; the same old
/// identifier may map differently in each table. Both tables are rebuilt
/// from empty on every run and are read-only once building finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemapTables {
    /// Old script identifier to replacement entry.
    pub scripts: BTreeMap<String, ScriptRemap>,
    /// Old shader identifier to replacement entry.
    pub shaders: BTreeMap<String, ShaderRemap>,
}

impl RemapTables {
    /// Creates a pair of empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a script mapping, returning the displaced entry when the
    /// old identifier was already present (last write wins).
    pub fn insert_script(&mut self, old_guid: String, entry: ScriptRemap) -> Option<ScriptRemap> {
        self.scripts.insert(old_guid, entry)
    }

    /// Inserts a shader mapping, returning the displaced entry when the
    /// old identifier was already present (last write wins).
    pub fn insert_shader(&mut self, old_guid: String, entry: ShaderRemap) -> Option<ShaderRemap> {
        self.shaders.insert(old_guid, entry)
    }

    /// True when neither table holds an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.shaders.is_empty()
    }
}

/// Location of an exported project tree, constructed once per run.
///
/// `scripts_dir` and `shader_dir` are absent when the corresponding
/// conventional subfolder does not exist; the matching builder pass is
/// then skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedLayout {
    /// The `Assets` directory under the chosen export root.
    pub assets_root: PathBuf,
    /// The `Scripts` subfolder, when present.
    pub scripts_dir: Option<PathBuf>,
    /// The `Shader` subfolder, when present.
    pub shader_dir: Option<PathBuf>,
}

/// Per-category counts of files rewritten during the tree walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteCounts {
    /// Scene and prefab files that had at least one reference replaced.
    pub instance_files_changed: usize,
    /// Material files that had at least one reference replaced.
    pub shader_files_changed: usize,
}

impl RewriteCounts {
    /// Total files rewritten across both categories.
    #[must_use]
    pub fn total(&self) -> usize {
        self.instance_files_changed + self.shader_files_changed
    }

    /// True when no file was rewritten.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
