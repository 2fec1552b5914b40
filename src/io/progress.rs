//! Progress reporting for batch generation

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Portraits: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch generation
///
/// Single runs report directly to stderr; real batches get a progress bar so
/// per-image reports do not scroll the terminal.
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Initialize the display for a batch of the given size
    pub fn initialize(&mut self, total: usize) {
        if total > 1 {
            let batch_bar = ProgressBar::new(total as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(batch_bar);
        }
    }

    /// Report one written image without disturbing the bar
    // Allow print for user feedback on generated files
    #[allow(clippy::print_stderr)]
    pub fn record_output(&self, file_name: &str, seed: u64) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.println(format!("Wrote {file_name} (seed {seed})"));
            batch_bar.inc(1);
        } else {
            eprintln!("Wrote {file_name} (seed {seed})");
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All portraits generated");
        }
    }
}
