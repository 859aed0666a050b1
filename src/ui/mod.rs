//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//! - [`InstallProgress`] bars shown around package installs
//!
//! # Example
//!
//! ```
//! use pyqt_fixer::ui::{MockUI, ProgressHandle, UserInterface};
//!
//! let mut ui = MockUI::new();
//! let mut bar = ui.start_progress_bar("Installing PyQt5...");
//! bar.finish("Installing PyQt5... Done.");
//! ```

pub mod mock;
pub mod progress;
pub mod terminal;
pub mod theme;

pub use mock::{BarEvent, MockProgress, MockUI};
pub use progress::InstallProgress;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, FixerTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Show a `[Progress]` line.
    fn progress(&mut self, msg: &str);

    /// Show an `[Error]` line.
    fn error(&mut self, msg: &str);

    /// Show unprefixed text (e.g., the guide).
    fn message(&mut self, msg: &str);

    /// Start a 0-100% progress bar.
    fn start_progress_bar(&mut self, message: &str) -> Box<dyn ProgressHandle>;
}

/// Handle for controlling a progress bar.
pub trait ProgressHandle {
    /// Jump to 100% and leave `msg` on screen.
    fn finish(&mut self, msg: &str);

    /// Stop where it is and leave `msg` on screen.
    fn abandon(&mut self, msg: &str);
}
