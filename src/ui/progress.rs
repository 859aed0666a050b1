//! Install progress bars.

use indicatif::{ProgressBar, ProgressStyle};

use super::ProgressHandle;

/// Width of the bar in columns.
pub const BAR_WIDTH: usize = 40;

/// A 0-100% bar shown around a package-manager call.
///
/// indicatif hides the bar automatically when stdout is not a terminal.
pub struct InstallProgress {
    bar: ProgressBar,
}

impl InstallProgress {
    /// Start a bar at 0% with `message`.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(&format!("[{{bar:{}}}] {{percent}}% - {{msg}}", BAR_WIDTH))
                .unwrap()
                .progress_chars("=> "),
        );
        bar.set_message(message.to_string());
        bar.set_position(0);
        Self { bar }
    }

    /// A bar that never draws (for tests or non-terminal output).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}

impl ProgressHandle for InstallProgress {
    fn finish(&mut self, msg: &str) {
        self.bar.set_position(100);
        self.bar.finish_with_message(msg.to_string());
    }

    fn abandon(&mut self, msg: &str) {
        self.bar.abandon_with_message(msg.to_string());
    }
}
