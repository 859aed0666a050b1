//! Log levels and records.

use chrono::{DateTime, Local};
use std::fmt;

/// Timestamp layout for each log line (`2024-05-01 14:03:22,417`).
pub const LINE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Severity of a run-log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    /// Prefix used when the record is echoed to the terminal.
    pub fn console_prefix(&self) -> &'static str {
        match self {
            LogLevel::Info => "[Progress]",
            LogLevel::Error => "[Error]",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// A single timestamped entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

impl LogRecord {
    /// Create a record stamped with the current local time.
    pub fn now(level: LogLevel, message: &str) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.to_string(),
        }
    }

    /// Line as written to the log file (no trailing newline).
    pub fn to_line(&self) -> String {
        format!(
            "{} - {} - {}",
            self.timestamp.format(LINE_TIMESTAMP_FORMAT),
            self.level,
            self.message
        )
    }
}
