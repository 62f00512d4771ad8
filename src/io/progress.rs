//! Search progress display
//!
//! The search has no meaningful completion fraction, so progress is a
//! spinner with elapsed time that resolves into a one-line summary of the
//! finished search.

use crate::algorithm::SearchStats;
use crate::io::configuration::PROGRESS_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the backtracking search runs
pub struct SearchProgress {
    spinner: ProgressBar,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Create and start the spinner
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("searching placement sequences");
        spinner.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));

        Self { spinner }
    }

    /// Stop the spinner and print the search summary
    pub fn finish(&self, solved: bool, stats: SearchStats) {
        let outcome = if solved { "solved" } else { "exhausted" };
        self.spinner.finish_with_message(format!(
            "{outcome}: {} nodes, {} placements, {} backtracks",
            stats.nodes, stats.placements, stats.backtracks
        ));
    }
}
