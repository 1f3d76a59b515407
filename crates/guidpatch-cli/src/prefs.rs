//! Remembered user preferences.
//!
//! One preference is persisted across runs: the last successfully chosen
//! export root, consulted when the positional root argument is omitted.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Persisted preferences document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Export root of the last successful run.
    #[serde(default)]
    pub last_export_root: Option<PathBuf>,
}

impl Preferences {
    /// Loads preferences from `path`.
    ///
    /// A missing file yields defaults; a malformed file is ignored with a
    /// warning rather than failing the run.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let Ok(text) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&text) {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(prefs = %path.display(), error = %err, "malformed preference file ignored");
                Self::default()
            }
        }
    }

    /// Writes preferences to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be written.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(path, text)
    }
}

/// Default preference file location under the user's home directory.
#[must_use]
pub fn default_prefs_path() -> Option<PathBuf> {
    std::env::home_dir().map(|home| home.join(".config").join("guidpatch").join("prefs.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn roundtrips_last_export_root() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let prefs = Preferences {
            last_export_root: Some(PathBuf::from("/tmp/Export")),
        };
        prefs.save(&path).unwrap();
        assert_eq!(Preferences::load(&path), prefs);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences::load(&dir.path().join("prefs.json"));
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn malformed_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(Preferences::load(&path), Preferences::default());
    }
}
