//! Progress display for the indexing and rewrite phases.

use std::path::Path;
use std::time::Duration;

use indicatif::ProgressBar;

use guidpatch_model::ProgressObserver;

/// Spinner bound to the model's progress-observer seam.
///
/// Advisory only; the phases run identically without it.
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Creates a ticking spinner on stderr.
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    /// Clears the spinner once the run is over.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ProgressSpinner {
    fn script_indexed(&self, guid: &str, index: usize, total: usize) {
        self.bar
            .set_message(format!("indexing scripts {}/{total}: {guid}", index + 1));
    }

    fn shader_indexed(&self, path: &Path, index: usize, total: usize) {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("?");
        self.bar
            .set_message(format!("indexing shaders {}/{total}: {name}", index + 1));
    }

    fn file_visited(&self, path: &Path) {
        self.bar.set_message(format!("rewriting: {}", path.display()));
    }
}
