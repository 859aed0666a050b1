//! PyQt5 Fixer - repair a broken PyQt5 installation.
//!
//! The fixer locates the Qt platform-plugin directory of a Python
//! interpreter, publishes it to later pip calls, verifies the package with
//! `pip show`, and reinstalls it once if verification fails. Every step is
//! written to a timestamped run log and mirrored to the terminal.
//!
//! # Modules
//!
//! - [`checker`] - Installation presence check
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - YAML configuration and command-line overrides
//! - [`environment`] - Launch environment and plugin-path configuration
//! - [`error`] - Error types and result aliases
//! - [`pip`] - Typed pip invocations behind the [`pip::PackageManager`] trait
//! - [`platform`] - Per-platform `site-packages` and plugin layouts
//! - [`repair`] - The check, configure, verify, reinstall routine
//! - [`runlog`] - Run log file and the reporter that mirrors it
//! - [`runtime`] - Python interpreter discovery
//! - [`shell`] - Process execution
//! - [`ui`] - Terminal output and progress bars
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use pyqt_fixer::platform::{PackageLayout, Platform};
//! use pyqt_fixer::runtime::PythonVersion;
//!
//! let layout = PackageLayout::new(
//!     Platform::Linux,
//!     Path::new("/usr"),
//!     PythonVersion { major: 3, minor: 11 },
//!     "PyQt5",
//! );
//! assert_eq!(
//!     layout.plugin_dir(),
//!     Path::new("/usr/lib/python3.11/site-packages/PyQt5/Qt/plugins/platforms"),
//! );
//! ```

pub mod checker;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod pip;
pub mod platform;
pub mod repair;
pub mod runlog;
pub mod runtime;
pub mod shell;
pub mod ui;

pub use error::{FixerError, Result};
