//! Python runtime discovery.
//!
//! The repair works against a concrete interpreter: its `sys.prefix` decides
//! where site-packages live, and `<interpreter> -m pip` is the package manager.
//! The interpreter is asked for both values once, up front.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FixerError, Result};
use crate::shell::{execute, CommandOptions};

/// Snippet run with `-c` to report prefix and `major.minor`, one per line.
pub const PROBE_SCRIPT: &str =
    "import sys; print(sys.prefix); print('%d.%d' % sys.version_info[:2])";

/// Interpreter names searched on PATH when none is configured.
#[cfg(windows)]
pub const DEFAULT_CANDIDATES: &[&str] = &["python", "py"];
#[cfg(not(windows))]
pub const DEFAULT_CANDIDATES: &[&str] = &["python3", "python"];

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(\d+)\.(\d+)").unwrap());

/// `major.minor` of a Python interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for PythonVersion {
    type Err = String;

    /// Accepts `3.11`, `3.11.4`, or a full `sys.version` string.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let caps = VERSION_RE
            .captures(s)
            .ok_or_else(|| format!("not a Python version: {:?}", s))?;
        let major = caps[1]
            .parse()
            .map_err(|_| format!("major version out of range: {}", &caps[1]))?;
        let minor = caps[2]
            .parse()
            .map_err(|_| format!("minor version out of range: {}", &caps[2]))?;
        Ok(Self { major, minor })
    }
}

/// A located Python interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonRuntime {
    /// Path or PATH-relative name used to launch the interpreter.
    pub executable: PathBuf,
    /// `sys.prefix`.
    pub prefix: PathBuf,
    pub version: PythonVersion,
}

impl PythonRuntime {
    pub fn new(
        executable: impl Into<PathBuf>,
        prefix: impl Into<PathBuf>,
        version: PythonVersion,
    ) -> Self {
        Self {
            executable: executable.into(),
            prefix: prefix.into(),
            version,
        }
    }

    /// Ask `executable` for its prefix and version.
    pub fn probe(executable: &Path) -> Result<Self> {
        let result = execute(
            executable.as_os_str(),
            &["-c", PROBE_SCRIPT],
            &CommandOptions::captured(),
        )?;

        if !result.success {
            return Err(FixerError::RuntimeProbeFailed {
                executable: executable.to_path_buf(),
                message: format!(
                    "probe exited with code {:?}: {}",
                    result.exit_code,
                    result.stderr.trim()
                ),
            });
        }

        let (prefix, version) = parse_probe_output(&result.stdout).map_err(|message| {
            FixerError::RuntimeProbeFailed {
                executable: executable.to_path_buf(),
                message,
            }
        })?;

        tracing::debug!(
            "Python {} at {} (prefix {})",
            version,
            executable.display(),
            prefix.display()
        );

        Ok(Self::new(executable, prefix, version))
    }

    /// Locate an interpreter.
    ///
    /// An explicit path is probed alone and its failure is returned as-is.
    /// Otherwise each name in [`DEFAULT_CANDIDATES`] is tried in order.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::probe(path);
        }

        for name in DEFAULT_CANDIDATES {
            match Self::probe(Path::new(name)) {
                Ok(runtime) => return Ok(runtime),
                Err(e) => tracing::debug!("Skipping interpreter candidate {}: {}", name, e),
            }
        }

        Err(FixerError::PythonNotFound {
            tried: DEFAULT_CANDIDATES.join(", "),
        })
    }

    /// Program to launch for `-m pip` calls.
    pub fn program(&self) -> &OsStr {
        self.executable.as_os_str()
    }
}

/// Split probe output into `(prefix, version)`.
pub fn parse_probe_output(stdout: &str) -> std::result::Result<(PathBuf, PythonVersion), String> {
    let mut lines = stdout.lines().map(str::trim).filter(|l| !l.is_empty());

    let prefix = lines
        .next()
        .ok_or_else(|| "probe printed no prefix".to_string())?;
    let version = lines
        .next()
        .ok_or_else(|| "probe printed no version".to_string())?
        .parse::<PythonVersion>()?;

    Ok((PathBuf::from(prefix), version))
}
