//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::runlog::LogLevel;

use super::{should_use_colors, FixerTheme, InstallProgress, ProgressHandle, UserInterface};

/// Terminal UI implementation writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: FixerTheme,
}

impl TerminalUI {
    /// Create a new terminal UI. Colors are used only when stdout is a TTY.
    pub fn new(no_color: bool) -> Self {
        let theme = if !no_color && should_use_colors() {
            FixerTheme::new()
        } else {
            FixerTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn progress(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_record(LogLevel::Info, msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_record(LogLevel::Error, msg)).ok();
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.text.apply_to(msg)).ok();
    }

    fn start_progress_bar(&mut self, message: &str) -> Box<dyn ProgressHandle> {
        Box::new(InstallProgress::new(message))
    }
}
