//! The `--guide` command.

use crate::error::Result;
use crate::runlog::Reporter;

use super::dispatcher::{Command, CommandResult};

/// Instructions printed by `--guide`.
pub const GUIDE_TEXT: &str = "\
1. If you encounter an error with the Qt platform plugin (e.g., \"Could not find the Qt platform plugin 'windows'\"),
   run pyqt-fixer with --fix (Windows) or --fix_linux (Linux).
2. The fixer will check for PyQt5 and configure the correct plugin path.
3. If the issue persists, PyQt5 will be reinstalled.
4. Every run writes a log file; check it for the exact steps taken.";

/// Prints usage instructions. Never spawns a process.
#[derive(Debug, Default)]
pub struct GuideCommand;

impl GuideCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for GuideCommand {
    fn execute(&self, reporter: &mut Reporter<'_>) -> Result<CommandResult> {
        reporter.text(GUIDE_TEXT);
        reporter.info("Displayed guide to user.");
        Ok(CommandResult::success())
    }
}
