//! Platform profiles and the install layout derived from them.
//!
//! Every path here is a pure function of its inputs. Nothing touches the
//! filesystem except the explicit `exists` probes in the checker and
//! configurator.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::runtime::PythonVersion;

/// Directory names under the package where Qt keeps its plugins, in probe order.
///
/// PyQt5 5.15.4 and later ship `Qt5/`; older wheels use `Qt/`.
pub const QT_DIR_CANDIDATES: &[&str] = &["Qt", "Qt5"];

/// OS-specific path-construction conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
}

impl Platform {
    /// Platform this binary was compiled for, if it is a supported one.
    pub fn host() -> Option<Self> {
        if cfg!(target_os = "windows") {
            Some(Platform::Windows)
        } else if cfg!(target_os = "linux") {
            Some(Platform::Linux)
        } else {
            None
        }
    }

    /// `site-packages` directory for an interpreter rooted at `prefix`.
    ///
    /// Windows: `<prefix>/Lib/site-packages`.
    /// Linux: `<prefix>/lib/python<major>.<minor>/site-packages`.
    pub fn site_packages(&self, prefix: &Path, version: PythonVersion) -> PathBuf {
        match self {
            Platform::Windows => prefix.join("Lib").join("site-packages"),
            Platform::Linux => prefix
                .join("lib")
                .join(format!("python{}", version))
                .join("site-packages"),
        }
    }

    /// Shell syntax that exports `key=value` in the user's own terminal.
    pub fn export_hint(&self, key: &str, value: &Path) -> String {
        match self {
            Platform::Windows => format!("set {}={}", key, value.display()),
            Platform::Linux => format!("export {}=\"{}\"", key, value.display()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "Windows"),
            Platform::Linux => write!(f, "Linux"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" | "win" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            _ => Err(format!("unknown platform: {}", s)),
        }
    }
}

/// Where a package lives for a given platform and interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    pub platform: Platform,
    pub prefix: PathBuf,
    pub version: PythonVersion,
    pub package: String,
}

impl PackageLayout {
    pub fn new(
        platform: Platform,
        prefix: impl Into<PathBuf>,
        version: PythonVersion,
        package: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            prefix: prefix.into(),
            version,
            package: package.into(),
        }
    }

    pub fn site_packages(&self) -> PathBuf {
        self.platform.site_packages(&self.prefix, self.version)
    }

    /// Directory whose presence marks the package as installed.
    pub fn package_dir(&self) -> PathBuf {
        self.site_packages().join(&self.package)
    }

    /// Primary Qt platform-plugin directory (`<package>/Qt/plugins/platforms`).
    pub fn plugin_dir(&self) -> PathBuf {
        self.plugin_dir_in(QT_DIR_CANDIDATES[0])
    }

    /// All plugin directories worth probing, primary first.
    pub fn plugin_dir_candidates(&self) -> Vec<PathBuf> {
        QT_DIR_CANDIDATES
            .iter()
            .map(|qt| self.plugin_dir_in(qt))
            .collect()
    }

    fn plugin_dir_in(&self, qt_dir: &str) -> PathBuf {
        self.package_dir()
            .join(qt_dir)
            .join("plugins")
            .join("platforms")
    }
}
