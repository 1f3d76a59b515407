//! The asset-catalog seam.
//!
//! The host project database (the authority on current identifiers, script
//! types, and live shaders) is consumed through [`AssetCatalog`]; the
//! builder never touches a concrete catalog implementation.

use std::path::{Path, PathBuf};

/// Type information for a script asset, resolved by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Name of the assembly the type is compiled into.
    pub assembly: String,
    /// Namespace-qualified type name, dot separated.
    pub full_name: String,
    /// Unqualified type name.
    pub class_name: String,
    /// Whether the type can be instantiated as a component. Scripts whose
    /// type is not component-capable never carry scene references and are
    /// skipped during indexing.
    pub is_component: bool,
}

/// Canonical identifier pair addressing one shader within the host
/// project: a globally-unique asset identifier plus the sub-object
/// identifier inside that asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderLocation {
    /// Asset identifier of the shader's containing asset.
    pub asset_guid: String,
    /// Sub-object identifier of the shader.
    pub object_id: u64,
}

/// Host catalog operations the remap-table builder depends on.
///
/// Every lookup is fallible by returning `None`; a missing answer skips
/// the one asset being indexed and never aborts a pass.
pub trait AssetCatalog {
    /// Current identifiers of all script-kind assets the catalog knows.
    fn script_guids(&self) -> Vec<String>;

    /// Resolves a current identifier to the asset's path in the catalog.
    fn guid_to_path(&self, guid: &str) -> Option<PathBuf>;

    /// Loads the script asset at `path` far enough to discover its
    /// defining type.
    fn script_type_at(&self, path: &Path) -> Option<TypeDescriptor>;

    /// Resolves a shader display name to a live shader and returns its
    /// canonical identifier pair.
    fn resolve_shader(&self, name: &str) -> Option<ShaderLocation>;
}
