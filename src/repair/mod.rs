//! PyQt5 repair workflow.
//!
//! # Modules
//!
//! - [`executor`] - The check → configure → verify → reinstall routine
//! - [`installer`] - Install/uninstall helpers with progress reporting

pub mod executor;
pub mod installer;

use std::path::PathBuf;

use crate::environment::PLUGIN_PATH_KEY;

pub use executor::RepairExecutor;
pub use installer::{install_package, run_checked, uninstall_package};

/// Default primary package.
pub const DEFAULT_TARGET: &str = "PyQt5";

/// Default add-on package reinstalled alongside the target.
pub const DEFAULT_COMPANION: &str = "qtwidgets";

/// The packages a repair acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPackages {
    pub target: String,
    pub companion: Option<String>,
}

impl TargetPackages {
    pub fn new(target: &str, companion: Option<&str>) -> Self {
        Self {
            target: target.to_string(),
            companion: companion.map(str::to_string),
        }
    }

    /// Target first, then companion if any.
    pub fn all(&self) -> Vec<String> {
        std::iter::once(self.target.clone())
            .chain(self.companion.clone())
            .collect()
    }
}

impl Default for TargetPackages {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET, Some(DEFAULT_COMPANION))
    }
}

/// Knobs for a single repair run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairOptions {
    /// Variable the plugin directory is published under.
    pub plugin_env_key: String,
    /// Run `pip show` again after a reinstall.
    pub reverify: bool,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            plugin_env_key: PLUGIN_PATH_KEY.to_string(),
            reverify: false,
        }
    }
}

/// How a repair ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairOutcome {
    /// `pip show` succeeded on the first try.
    Verified,
    /// Verification failed and one reinstall cycle ran.
    Reinstalled,
    /// Re-verification after the reinstall still failed.
    StillBroken,
    /// No plugin directory was found; nothing was verified.
    PluginPathMissing { probed: PathBuf },
}

impl RepairOutcome {
    /// Whether the run should exit successfully.
    ///
    /// A missing plugin path is logged as an error but does not fail the process.
    pub fn is_success(&self) -> bool {
        !matches!(self, RepairOutcome::StillBroken)
    }
}

/// Summary of a repair run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairReport {
    pub outcome: RepairOutcome,
    /// The package directory was missing and an initial install ran.
    pub installed_missing: bool,
    /// Plugin directory published to later commands.
    pub plugin_dir: Option<PathBuf>,
}

impl RepairReport {
    pub fn new(outcome: RepairOutcome) -> Self {
        Self {
            outcome,
            installed_missing: false,
            plugin_dir: None,
        }
    }
}
