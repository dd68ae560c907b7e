//! Progress reporting for batch generation runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Levels: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for batch level generation
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress manager with no active display
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Start the batch bar for the given number of levels
    pub fn initialize(&mut self, level_count: usize) {
        let bar = ProgressBar::new(level_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Record one completed level
    pub fn advance(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All levels generated");
        }
    }
}
