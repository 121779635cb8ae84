//! Spinner for the closure run, whose length is unknown up front.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use super::colors_enabled;

/// Spinner shown on stderr while types are being resolved.
///
/// Draws nothing when stderr is not a terminal.
///
/// ```no_run
/// use typegraph_cli::ui::Spinner;
///
/// let spinner = Spinner::new("Resolving types...");
/// spinner.resolved(3, "demo.Box");
/// spinner.finish("Resolved 3 types");
/// ```
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Create and start a new spinner.
    pub fn new(message: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["◐", "◓", "◑", "◒"]);
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// A spinner that never draws, for `--quiet` runs.
    pub fn hidden() -> Self {
        Self {
            pb: ProgressBar::hidden(),
        }
    }

    /// Progress line for a closure run.
    pub fn resolved(&self, count: usize, current: &str) {
        self.pb.set_message(format!(
            "Resolved {} | current {}",
            super::pluralize(count, "type"),
            current
        ));
    }

    /// Finish spinner with success message.
    pub fn finish(&self, message: &str) {
        let mark = if colors_enabled() { "✓".green().to_string() } else { "✓".to_string() };
        self.pb.finish_with_message(format!("{} {}", mark, message));
    }

    /// Finish spinner with error message.
    pub fn fail(&self, message: &str) {
        let mark = if colors_enabled() { "✗".red().to_string() } else { "✗".to_string() };
        self.pb.finish_with_message(format!("{} {}", mark, message));
    }
}
