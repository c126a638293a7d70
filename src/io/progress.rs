//! Progress display for simulated drag sessions

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SESSION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Running tally shown next to the progress bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragTally {
    /// Drags that locked onto a snap point
    pub snapped: usize,
    /// Drags whose tile was discarded
    pub rejected: usize,
}

/// Single progress bar over the drag phase of a session
pub struct SessionProgress {
    bar: ProgressBar,
    tally: DragTally,
}

impl SessionProgress {
    /// Progress bar for `drags` gestures
    pub fn new(drags: usize) -> Self {
        let bar = ProgressBar::new(drags as u64);
        bar.set_style(SESSION_STYLE.clone());
        bar.set_prefix("drags");
        Self {
            bar,
            tally: DragTally::default(),
        }
    }

    /// Progress bar that draws nothing, for tests and piped output
    pub fn hidden(drags: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(drags as u64);
        Self {
            bar,
            tally: DragTally::default(),
        }
    }

    /// Record one finished drag
    pub fn record(&mut self, snapped: bool) {
        if snapped {
            self.tally.snapped += 1;
        } else {
            self.tally.rejected += 1;
        }
        self.bar.inc(1);
        self.bar.set_message(format!(
            "snapped {} / rejected {}",
            self.tally.snapped, self.tally.rejected
        ));
    }

    /// Totals recorded so far
    pub const fn tally(&self) -> DragTally {
        self.tally
    }

    /// Number of drags recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
