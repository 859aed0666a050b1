//! Run log: the timestamped record of what a fix run did.
//!
//! Components never write to a global logger. They receive a [`LogSink`]
//! (usually wrapped in a [`Reporter`] that also echoes to the terminal).
//!
//! - [`RunLog`] appends to `<log-dir>/PyQT5-Fixer_log_<YYYY-MM-DD_HH-MM>.txt`
//! - [`MemorySink`] keeps records in memory for tests
//!
//! This is separate from `tracing`, which carries developer diagnostics to
//! stderr when `--debug` is set.

pub mod file;
pub mod record;
pub mod reporter;

pub use file::{default_log_dir, log_file_name, RunLog, TOOL_NAME};
pub use record::{LogLevel, LogRecord};
pub use reporter::Reporter;

/// Destination for run-log records.
pub trait LogSink {
    /// Append one record. Write failures are reported via `tracing`, not returned.
    fn record(&mut self, level: LogLevel, message: &str);
}

/// In-memory sink.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<LogRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Messages in order, without timestamps.
    pub fn messages(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.message.as_str()).collect()
    }

    /// Whether any record at `level` contains `needle`.
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.level == level && r.message.contains(needle))
    }
}

impl LogSink for MemorySink {
    fn record(&mut self, level: LogLevel, message: &str) {
        self.records.push(LogRecord::now(level, message));
    }
}
