//! Mirrors run-log records to the terminal.

use crate::ui::{ProgressHandle, UserInterface};

use super::{LogLevel, LogSink};

/// Writes every record to both the [`LogSink`] and the [`UserInterface`].
///
/// This is the only channel components use to talk to the user, so the log
/// file and the terminal never disagree.
pub struct Reporter<'a> {
    ui: &'a mut dyn UserInterface,
    sink: &'a mut dyn LogSink,
}

impl<'a> Reporter<'a> {
    pub fn new(ui: &'a mut dyn UserInterface, sink: &'a mut dyn LogSink) -> Self {
        Self { ui, sink }
    }

    /// Info-level record, shown as `[Progress] msg`.
    pub fn info(&mut self, msg: &str) {
        self.ui.progress(msg);
        self.sink.record(LogLevel::Info, msg);
    }

    /// Error-level record, shown as `[Error] msg`.
    pub fn error(&mut self, msg: &str) {
        self.ui.error(msg);
        self.sink.record(LogLevel::Error, msg);
    }

    /// Plain text for the terminal only (not logged).
    pub fn text(&mut self, msg: &str) {
        self.ui.message(msg);
    }

    pub fn progress_bar(&mut self, message: &str) -> Box<dyn ProgressHandle> {
        self.ui.start_progress_bar(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runlog::MemorySink;
    use crate::ui::MockUI;

    #[test]
    fn info_goes_to_both_outputs() {
        let mut ui = MockUI::new();
        let mut sink = MemorySink::new();
        {
            let mut reporter = Reporter::new(&mut ui, &mut sink);
            reporter.info("Checking PyQt5 installation...");
        }
        assert!(ui.has_progress("Checking PyQt5 installation..."));
        assert!(sink.contains(LogLevel::Info, "Checking PyQt5 installation..."));
    }

    #[test]
    fn error_goes_to_both_outputs() {
        let mut ui = MockUI::new();
        let mut sink = MemorySink::new();
        {
            let mut reporter = Reporter::new(&mut ui, &mut sink);
            reporter.error("Qt plugin path not found.");
        }
        assert!(ui.has_error("Qt plugin path not found."));
        assert!(sink.contains(LogLevel::Error, "Qt plugin path not found."));
    }

    #[test]
    fn text_is_terminal_only() {
        let mut ui = MockUI::new();
        let mut sink = MemorySink::new();
        {
            let mut reporter = Reporter::new(&mut ui, &mut sink);
            reporter.text("guide body");
        }
        assert!(ui.has_message("guide body"));
        assert!(sink.records().is_empty());
    }
}
