//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. There are no subcommands;
//! the action is picked from the `--guide` / `--fix` / `--fix_linux` flags.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::platform::Platform;

/// PyQt5 Fixer - repair a broken PyQt5 installation.
#[derive(Debug, Parser)]
#[command(name = "pyqt-fixer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Display the guide for PyQt5 fixing
    #[arg(long)]
    pub guide: bool,

    /// Fix PyQt5 on Windows
    #[arg(long)]
    pub fix: bool,

    /// Fix PyQt5 on Linux
    #[arg(long = "fix_linux", alias = "fix-linux")]
    pub fix_linux: bool,

    /// Python interpreter to repair (default: python3/python on PATH)
    #[arg(long, env = "PYQT_FIXER_PYTHON")]
    pub python: Option<PathBuf>,

    /// Path to a YAML config file
    #[arg(short, long, env = "PYQT_FIXER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for run logs (default: logs/ next to the executable)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Package to repair
    #[arg(long)]
    pub package: Option<String>,

    /// Companion package reinstalled alongside the target
    #[arg(long)]
    pub companion: Option<String>,

    /// Skip the companion package
    #[arg(long)]
    pub no_companion: bool,

    /// Verify again after reinstalling
    #[arg(long)]
    pub reverify: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// What the invocation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Guide,
    Fix(Platform),
    /// No action flag was given.
    None,
}

impl Cli {
    /// Resolve the action flags. `--guide` wins, then `--fix`, then `--fix_linux`.
    pub fn action(&self) -> Action {
        if self.guide {
            Action::Guide
        } else if self.fix {
            Action::Fix(Platform::Windows)
        } else if self.fix_linux {
            Action::Fix(Platform::Linux)
        } else {
            Action::None
        }
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            package: self.package.clone(),
            companion: self.companion.clone(),
            no_companion: self.no_companion,
            python: self.python.clone(),
            log_dir: self.log_dir.clone(),
            reverify: self.reverify,
        }
    }
}
