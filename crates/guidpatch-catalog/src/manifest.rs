//! Project manifest loading and catalog lookups.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use guidpatch_model::{AssetCatalog, ShaderLocation, TypeDescriptor};

use crate::error::{CatalogError, Result};

/// One script asset as listed in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    /// Identifier the catalog currently assigns to the asset.
    pub guid: String,
    /// Asset path within the project.
    pub path: PathBuf,
    /// Assembly the defining type is compiled into.
    pub assembly: String,
    /// Namespace-qualified name of the defining type.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Whether the defining type is component-capable.
    #[serde(default = "default_component")]
    pub component: bool,
}

/// One shader object as listed in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShaderEntry {
    /// Display name the shader resolves by.
    pub name: String,
    /// Asset identifier of the shader's containing asset.
    pub asset_guid: String,
    /// Sub-object identifier of the shader.
    pub object_id: u64,
}

#[derive(Debug, Default, Deserialize)]
struct ManifestDoc {
    #[serde(default)]
    scripts: Vec<ScriptEntry>,
    #[serde(default)]
    shaders: Vec<ShaderEntry>,
}

/// Asset catalog loaded from a JSON project manifest.
///
/// Lookups are indexed by identifier, asset path, and shader display name.
/// Entries sharing a key keep the last occurrence in manifest order.
#[derive(Debug, Default)]
pub struct ProjectManifest {
    scripts_by_guid: BTreeMap<String, ScriptEntry>,
    guids_by_path: BTreeMap<PathBuf, String>,
    shaders_by_name: BTreeMap<String, ShaderEntry>,
}

fn default_component() -> bool {
    true
}

impl ProjectManifest {
    /// Loads a manifest from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the file is missing, unreadable, or
    /// not a valid manifest document.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CatalogError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::ManifestRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let doc: ManifestDoc =
            serde_json::from_str(&text).map_err(|e| CatalogError::ManifestParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        let manifest = Self::from_doc(doc);
        debug!(
            manifest = %path.display(),
            script_count = manifest.scripts_by_guid.len(),
            shader_count = manifest.shaders_by_name.len(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    /// Parses a manifest from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ManifestParse`] when the text is not a
    /// valid manifest document.
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: ManifestDoc =
            serde_json::from_str(text).map_err(|e| CatalogError::ManifestParse {
                path: PathBuf::from("<inline>"),
                source: e,
            })?;
        Ok(Self::from_doc(doc))
    }

    fn from_doc(doc: ManifestDoc) -> Self {
        let mut scripts_by_guid = BTreeMap::new();
        let mut guids_by_path = BTreeMap::new();
        for entry in doc.scripts {
            if entry.guid.is_empty() {
                warn!(path = %entry.path.display(), "script entry without guid ignored");
                continue;
            }
            guids_by_path.insert(entry.path.clone(), entry.guid.clone());
            if let Some(displaced) = scripts_by_guid.insert(entry.guid.clone(), entry) {
                warn!(guid = %displaced.guid, "duplicate script guid in manifest, keeping last");
            }
        }
        let mut shaders_by_name = BTreeMap::new();
        for entry in doc.shaders {
            if let Some(displaced) = shaders_by_name.insert(entry.name.clone(), entry) {
                warn!(name = %displaced.name, "duplicate shader name in manifest, keeping last");
            }
        }
        Self {
            scripts_by_guid,
            guids_by_path,
            shaders_by_name,
        }
    }

    /// Number of script assets in the catalog.
    #[must_use]
    pub fn script_count(&self) -> usize {
        self.scripts_by_guid.len()
    }

    /// Number of shader objects in the catalog.
    #[must_use]
    pub fn shader_count(&self) -> usize {
        self.shaders_by_name.len()
    }
}

impl AssetCatalog for ProjectManifest {
    fn script_guids(&self) -> Vec<String> {
        self.scripts_by_guid.keys().cloned().collect()
    }

    fn guid_to_path(&self, guid: &str) -> Option<PathBuf> {
        self.scripts_by_guid.get(guid).map(|entry| entry.path.clone())
    }

    fn script_type_at(&self, path: &Path) -> Option<TypeDescriptor> {
        let guid = self.guids_by_path.get(path)?;
        let entry = self.scripts_by_guid.get(guid)?;
        let class_name = entry
            .type_name
            .rsplit('.')
            .next()
            .unwrap_or(entry.type_name.as_str())
            .to_string();
        Some(TypeDescriptor {
            assembly: entry.assembly.clone(),
            full_name: entry.type_name.clone(),
            class_name,
            is_component: entry.component,
        })
    }

    fn resolve_shader(&self, name: &str) -> Option<ShaderLocation> {
        self.shaders_by_name.get(name).map(|entry| ShaderLocation {
            asset_guid: entry.asset_guid.clone(),
            object_id: entry.object_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "scripts": [
            {
                "guid": "bbb222",
                "path": "Assets/Scripts/Game/Player.cs",
                "assembly": "Assembly-CSharp",
                "type": "Game.Player"
            },
            {
                "guid": "ccc333",
                "path": "Assets/Scripts/Util/Registry.cs",
                "assembly": "Assembly-CSharp",
                "type": "Util.Registry",
                "component": false
            }
        ],
        "shaders": [
            { "name": "Custom/Foo", "asset_guid": "ddd444", "object_id": 999 }
        ]
    }"#;

    #[test]
    fn parses_scripts_and_shaders() {
        let manifest = ProjectManifest::from_json(SAMPLE).unwrap();
        assert_eq!(manifest.script_count(), 2);
        assert_eq!(manifest.shader_count(), 1);
        assert_eq!(
            manifest.script_guids(),
            vec!["bbb222".to_string(), "ccc333".to_string()]
        );
    }

    #[test]
    fn resolves_guid_to_path_and_type() {
        let manifest = ProjectManifest::from_json(SAMPLE).unwrap();
        let path = manifest.guid_to_path("bbb222").unwrap();
        assert_eq!(path, PathBuf::from("Assets/Scripts/Game/Player.cs"));

        let descriptor = manifest.script_type_at(&path).unwrap();
        assert_eq!(descriptor.assembly, "Assembly-CSharp");
        assert_eq!(descriptor.full_name, "Game.Player");
        assert_eq!(descriptor.class_name, "Player");
        assert!(descriptor.is_component);
    }

    #[test]
    fn component_flag_defaults_true_and_honors_false() {
        let manifest = ProjectManifest::from_json(SAMPLE).unwrap();
        let registry_path = manifest.guid_to_path("ccc333").unwrap();
        let descriptor = manifest.script_type_at(&registry_path).unwrap();
        assert!(!descriptor.is_component);
    }

    #[test]
    fn resolves_shader_location() {
        let manifest = ProjectManifest::from_json(SAMPLE).unwrap();
        let location = manifest.resolve_shader("Custom/Foo").unwrap();
        assert_eq!(location.asset_guid, "ddd444");
        assert_eq!(location.object_id, 999);
        assert!(manifest.resolve_shader("Custom/Missing").is_none());
    }

    #[test]
    fn empty_document_yields_empty_catalog() {
        let manifest = ProjectManifest::from_json("{}").unwrap();
        assert_eq!(manifest.script_count(), 0);
        assert_eq!(manifest.shader_count(), 0);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("manifest.json");
        let error = ProjectManifest::load(&missing).unwrap_err();
        assert!(matches!(error, CatalogError::ManifestNotFound { .. }));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, SAMPLE).unwrap();
        let manifest = ProjectManifest::load(&path).unwrap();
        assert_eq!(manifest.script_count(), 2);
    }
}
