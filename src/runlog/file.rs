//! File-backed run log.

use anyhow::Context;
use chrono::{DateTime, Local};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::{LogLevel, LogRecord, LogSink};

/// Name stem of every log file.
pub const TOOL_NAME: &str = "PyQT5-Fixer";

/// Timestamp layout embedded in the file name (minute resolution).
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M";

/// File name for a run started at `started`.
pub fn log_file_name(started: &DateTime<Local>) -> String {
    format!(
        "{}_log_{}.txt",
        TOOL_NAME,
        started.format(FILE_TIMESTAMP_FORMAT)
    )
}

/// Default log directory: `logs/` next to the running executable.
pub fn default_log_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locating the running executable")?;
    let dir = exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(dir.join("logs"))
}

/// Append-only log file for a single run.
///
/// Opened once by [`RunLog::create`], flushed by [`RunLog::finish`] or on drop.
/// Runs started within the same minute share a file.
#[derive(Debug)]
pub struct RunLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl RunLog {
    /// Create `dir` if needed and open the log file for a run started now.
    pub fn create(dir: &Path) -> Result<Self> {
        Self::create_at(dir, &Local::now())
    }

    /// Like [`RunLog::create`] with an explicit start time.
    pub fn create_at(dir: &Path, started: &DateTime<Local>) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;

        let path = dir.join(log_file_name(started));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.display()))?;

        tracing::debug!("Run log opened at {}", path.display());

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and close the log.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl LogSink for RunLog {
    fn record(&mut self, level: LogLevel, message: &str) {
        let line = LogRecord::now(level, message).to_line();
        if let Err(e) = writeln!(self.writer, "{}", line) {
            tracing::warn!("Failed to write to {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for RunLog {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn file_name_uses_minute_timestamp() {
        let started = Local.with_ymd_and_hms(2024, 1, 9, 7, 5, 59).unwrap();
        assert_eq!(
            log_file_name(&started),
            "PyQT5-Fixer_log_2024-01-09_07-05.txt"
        );
    }

    #[test]
    fn create_makes_missing_logs_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("logs");
        let log = RunLog::create(&dir).unwrap();
        assert!(dir.is_dir());
        assert!(log.path().starts_with(&dir));
        assert!(log.path().exists());
    }

    #[test]
    fn records_are_written_on_finish() {
        let temp = TempDir::new().unwrap();
        let mut log = RunLog::create(temp.path()).unwrap();
        let path = log.path().to_path_buf();

        log.record(LogLevel::Info, "Checking PyQt5 installation...");
        log.record(LogLevel::Error, "Qt plugin path not found.");
        log.finish().unwrap();

        let contents = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - INFO - Checking PyQt5 installation..."));
        assert!(lines[1].ends_with(" - ERROR - Qt plugin path not found."));
    }

    #[test]
    fn drop_flushes_pending_records() {
        let temp = TempDir::new().unwrap();
        let path = {
            let mut log = RunLog::create(temp.path()).unwrap();
            log.record(LogLevel::Info, "dropped");
            log.path().to_path_buf()
        };
        assert!(fs::read_to_string(path).unwrap().contains("dropped"));
    }

    #[test]
    fn same_minute_runs_append_to_one_file() {
        let temp = TempDir::new().unwrap();
        let started = Local.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap();

        let mut first = RunLog::create_at(temp.path(), &started).unwrap();
        first.record(LogLevel::Info, "first run");
        let path = first.path().to_path_buf();
        first.finish().unwrap();

        let mut second = RunLog::create_at(temp.path(), &started).unwrap();
        second.record(LogLevel::Info, "second run");
        second.finish().unwrap();

        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("first run"));
        assert!(contents.contains("second run"));
    }

    #[test]
    fn create_fails_when_dir_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("logs");
        fs::write(&blocker, "not a directory").unwrap();
        assert!(RunLog::create(&blocker).is_err());
    }
}
