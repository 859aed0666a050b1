//! Configuration schema.

use serde::Deserialize;
use std::path::PathBuf;

use crate::environment::PLUGIN_PATH_KEY;
use crate::repair::{RepairOptions, TargetPackages, DEFAULT_COMPANION, DEFAULT_TARGET};

/// Settings for a fix run.
///
/// Every field is optional in the YAML file; missing fields take the
/// defaults below.
///
/// ```yaml
/// package: PyQt5
/// companion: qtwidgets   # or null to skip the companion
/// plugin_env_key: QT_QPA_PLATFORM_PLUGIN_PATH
/// python: /usr/bin/python3
/// log_dir: /var/log/pyqt-fixer
/// reverify: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixerConfig {
    /// Package to check and repair.
    pub package: String,

    /// Add-on package reinstalled alongside the target.
    pub companion: Option<String>,

    /// Environment variable that receives the plugin directory.
    pub plugin_env_key: String,

    /// Interpreter to use instead of searching PATH.
    pub python: Option<PathBuf>,

    /// Directory for run logs (default: `logs/` next to the executable).
    pub log_dir: Option<PathBuf>,

    /// Run `pip show` again after a reinstall.
    pub reverify: bool,
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_TARGET.to_string(),
            companion: Some(DEFAULT_COMPANION.to_string()),
            plugin_env_key: PLUGIN_PATH_KEY.to_string(),
            python: None,
            log_dir: None,
            reverify: false,
        }
    }
}

impl FixerConfig {
    pub fn packages(&self) -> TargetPackages {
        TargetPackages::new(&self.package, self.companion.as_deref())
    }

    pub fn repair_options(&self) -> RepairOptions {
        RepairOptions {
            plugin_env_key: self.plugin_env_key.clone(),
            reverify: self.reverify,
        }
    }
}
