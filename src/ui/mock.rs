//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use pyqt_fixer::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.progress("Checking PyQt5 installation...");
//! ui.error("Qt plugin path not found.");
//!
//! assert!(ui.has_progress("Checking PyQt5"));
//! assert!(ui.has_error("plugin path"));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{ProgressHandle, UserInterface};

/// How a mock progress bar ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarEvent {
    Started(String),
    Finished(String),
    Abandoned(String),
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    progress: Vec<String>,
    errors: Vec<String>,
    messages: Vec<String>,
    bar_events: Rc<RefCell<Vec<BarEvent>>>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured `[Progress]` lines.
    pub fn progress_lines(&self) -> &[String] {
        &self.progress
    }

    /// Get all captured `[Error]` lines.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Progress-bar lifecycle events in order.
    pub fn bar_events(&self) -> Vec<BarEvent> {
        self.bar_events.borrow().clone()
    }

    /// Check if a progress line containing `msg` was shown.
    pub fn has_progress(&self, msg: &str) -> bool {
        self.progress.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a plain message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn progress(&mut self, msg: &str) {
        self.progress.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn start_progress_bar(&mut self, message: &str) -> Box<dyn ProgressHandle> {
        self.bar_events
            .borrow_mut()
            .push(BarEvent::Started(message.to_string()));
        Box::new(MockProgress {
            events: Rc::clone(&self.bar_events),
        })
    }
}

/// Progress bar that reports into its parent [`MockUI`].
#[derive(Debug)]
pub struct MockProgress {
    events: Rc<RefCell<Vec<BarEvent>>>,
}

impl ProgressHandle for MockProgress {
    fn finish(&mut self, msg: &str) {
        self.events
            .borrow_mut()
            .push(BarEvent::Finished(msg.to_string()));
    }

    fn abandon(&mut self, msg: &str) {
        self.events
            .borrow_mut()
            .push(BarEvent::Abandoned(msg.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_lines_by_kind() {
        let mut ui = MockUI::new();
        ui.progress("a");
        ui.error("b");
        ui.message("c");
        assert_eq!(ui.progress_lines(), &["a".to_string()]);
        assert_eq!(ui.errors(), &["b".to_string()]);
        assert!(ui.has_message("c"));
    }

    #[test]
    fn progress_bar_events_are_shared() {
        let mut ui = MockUI::new();
        let mut bar = ui.start_progress_bar("Installing PyQt5...");
        bar.finish("Installing PyQt5... Done.");
        let mut failed = ui.start_progress_bar("Installing qtwidgets...");
        failed.abandon("Installing qtwidgets... Failed.");

        assert_eq!(
            ui.bar_events(),
            vec![
                BarEvent::Started("Installing PyQt5...".into()),
                BarEvent::Finished("Installing PyQt5... Done.".into()),
                BarEvent::Started("Installing qtwidgets...".into()),
                BarEvent::Abandoned("Installing qtwidgets... Failed.".into()),
            ]
        );
    }
}
