//! Shared data model for the exported-project guid patcher.
//!
//! Holds the remap entry records and tables built during indexing, the
//! exported-tree layout, the asset-catalog trait the host project database
//! is consumed through, the progress-observer seam, and the compiled
//! reference patterns matched against serialized asset text.

pub mod catalog;
pub mod patterns;
pub mod progress;
pub mod types;

pub use catalog::{AssetCatalog, ShaderLocation, TypeDescriptor};
pub use patterns::{GUID_REF, SHADER_NAME, SHADER_REF};
pub use progress::{NoProgress, ProgressObserver};
pub use types::{
    ASSETS_DIR_NAME, ExportedLayout, INSTANCE_EXTENSIONS, MATERIAL_EXTENSIONS, META_SUFFIX,
    RemapTables, RewriteCounts, SCRIPT_SOURCE_EXT, SCRIPTS_DIR_NAME, SHADER_DIR_NAME,
    SHADER_SOURCE_EXT, ScriptRemap, ShaderRemap,
};
