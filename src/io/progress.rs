//! Batch progress reporting for multi-file mosaic generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{elapsed}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_template_error| ProgressStyle::default_bar())
        .progress_chars("=> ")
});

/// Coordinates progress display for batch mosaic generation
///
/// One bar tracks the file batch; the message shows the file currently
/// being processed. The bar ticks on its own so single large files still
/// show elapsed time moving.
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active display
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Begin displaying progress for a batch of `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        self.batch_bar = Some(bar);
    }

    /// Mark `path` as the file currently being processed
    pub fn start_file(&mut self, path: &Path) {
        if let Some(bar) = &self.batch_bar {
            let name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into());
            bar.set_message(name);
        }
    }

    /// Record one file as finished
    pub fn complete_file(&mut self) {
        if let Some(bar) = &self.batch_bar {
            bar.inc(1);
        }
    }

    /// Finish and clear the display
    pub fn finish(&mut self) {
        if let Some(bar) = self.batch_bar.take() {
            bar.finish_with_message("done");
        }
    }
}
