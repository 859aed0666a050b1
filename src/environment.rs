//! Launch environment and the plugin-path configurator.
//!
//! The process environment is never mutated. The plugin path goes into a
//! [`LaunchEnv`] that is handed to every package-manager call made after
//! configuration, so only those children see it.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::platform::PackageLayout;
use crate::runlog::Reporter;

/// Variable Qt reads to locate its platform plugins.
pub const PLUGIN_PATH_KEY: &str = "QT_QPA_PLATFORM_PLUGIN_PATH";

/// Variables applied to spawned package-manager processes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchEnv {
    vars: BTreeMap<String, String>,
}

impl LaunchEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }
}

/// Find the Qt plugin directory and publish it under `key` in `env`.
///
/// Candidates are probed in [`PackageLayout::plugin_dir_candidates`] order.
/// Returns the directory used, or `None` (with an error record) when none
/// exists. `env` is left untouched on failure.
pub fn configure_plugin_path(
    layout: &PackageLayout,
    key: &str,
    env: &mut LaunchEnv,
    reporter: &mut Reporter<'_>,
) -> Option<PathBuf> {
    let Some(dir) = layout
        .plugin_dir_candidates()
        .into_iter()
        .find(|candidate| candidate.is_dir())
    else {
        tracing::debug!(
            "No plugin directory among {:?}",
            layout.plugin_dir_candidates()
        );
        reporter.error("Qt plugin path not found.");
        return None;
    };

    let dir = std::path::absolute(&dir).unwrap_or(dir);
    env.set(key, dir.to_string_lossy());
    reporter.info("Adding Qt plugin path to environment variables...");
    reporter.info(&format!(
        "To use it in your own shell: {}",
        layout.platform.export_hint(key, &dir)
    ));

    Some(dir)
}
