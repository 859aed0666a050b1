//! Error types for fixer operations.
//!
//! This module defines [`FixerError`], the primary error type used throughout
//! the tool, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FixerError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `FixerError::Other`) for unexpected errors
//! - A missing plugin directory or a failed `pip show` is an outcome, not an error

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fixer operations.
#[derive(Debug, Error)]
pub enum FixerError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// No usable Python interpreter could be located.
    #[error("No Python interpreter found (tried: {tried})")]
    PythonNotFound { tried: String },

    /// The interpreter ran but did not report a usable prefix/version.
    #[error("Failed to inspect Python runtime {executable}: {message}")]
    RuntimeProbeFailed { executable: PathBuf, message: String },

    /// External command failed or could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FixerError {
    /// Process exit code for this error.
    ///
    /// A failed package-manager call exits with the tool's own code.
    pub fn exit_code(&self) -> i32 {
        match self {
            FixerError::CommandFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// Result type alias for fixer operations.
pub type Result<T> = std::result::Result<T, FixerError>;
