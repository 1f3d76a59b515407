//! Exported-tree locator.

use std::path::{Path, PathBuf};

use guidpatch_model::{ASSETS_DIR_NAME, ExportedLayout, SCRIPTS_DIR_NAME, SHADER_DIR_NAME};

use crate::error::{LayoutError, Result};

/// Locates the conventional folders of an exported project tree.
///
/// The `Assets` folder must exist under `root`; the `Scripts` and
/// `Shader` subfolders are each optional, and an absent one simply skips
/// the corresponding indexing pass later.
///
/// # Errors
///
/// Returns [`LayoutError::AssetsMissing`] when `root` has no `Assets`
/// folder. This is the only fatal configuration fault.
pub fn locate(root: &Path) -> Result<ExportedLayout> {
    let assets_root = root.join(ASSETS_DIR_NAME);
    if !assets_root.is_dir() {
        return Err(LayoutError::AssetsMissing {
            root: root.to_path_buf(),
        });
    }
    Ok(ExportedLayout {
        scripts_dir: existing_dir(assets_root.join(SCRIPTS_DIR_NAME)),
        shader_dir: existing_dir(assets_root.join(SHADER_DIR_NAME)),
        assets_root,
    })
}

fn existing_dir(path: PathBuf) -> Option<PathBuf> {
    path.is_dir().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_assets_folder_is_fatal() {
        let dir = TempDir::new().unwrap();
        let error = locate(dir.path()).unwrap_err();
        assert!(matches!(error, LayoutError::AssetsMissing { .. }));
    }

    #[test]
    fn conventional_subfolders_are_optional() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("Assets")).unwrap();
        let layout = locate(dir.path()).unwrap();
        assert_eq!(layout.assets_root, dir.path().join("Assets"));
        assert!(layout.scripts_dir.is_none());
        assert!(layout.shader_dir.is_none());
    }

    #[test]
    fn detects_present_subfolders() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("Assets/Scripts")).unwrap();
        std::fs::create_dir_all(dir.path().join("Assets/Shader")).unwrap();
        let layout = locate(dir.path()).unwrap();
        assert_eq!(layout.scripts_dir, Some(dir.path().join("Assets/Scripts")));
        assert_eq!(layout.shader_dir, Some(dir.path().join("Assets/Shader")));
    }
}
