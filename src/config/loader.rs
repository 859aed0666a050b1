//! Configuration loading.
//!
//! Precedence (later overrides earlier):
//! 1. Built-in defaults
//! 2. YAML file given by `--config` / `PYQT_FIXER_CONFIG`
//! 3. Command-line flags

use crate::config::schema::FixerConfig;
use crate::error::{FixerError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Values supplied on the command line. `None` leaves the config value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub package: Option<String>,
    pub companion: Option<String>,
    pub no_companion: bool,
    pub python: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub reverify: bool,
}

/// Parse a config file.
pub fn load_config_file(path: &Path) -> Result<FixerConfig> {
    if !path.exists() {
        return Err(FixerError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(FixerConfig::default());
    }

    serde_yaml::from_str(&contents).map_err(|e| FixerError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Build the effective config from an optional file plus overrides.
pub fn load_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<FixerConfig> {
    let mut config = match path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        None => FixerConfig::default(),
    };
    apply_overrides(&mut config, overrides);
    Ok(config)
}

/// Apply command-line overrides on top of `config`.
pub fn apply_overrides(config: &mut FixerConfig, overrides: &ConfigOverrides) {
    if let Some(package) = &overrides.package {
        config.package = package.clone();
    }
    if overrides.no_companion {
        config.companion = None;
    } else if let Some(companion) = &overrides.companion {
        config.companion = Some(companion.clone());
    }
    if let Some(python) = &overrides.python {
        config.python = Some(python.clone());
    }
    if let Some(log_dir) = &overrides.log_dir {
        config.log_dir = Some(log_dir.clone());
    }
    if overrides.reverify {
        config.reverify = true;
    }
}
