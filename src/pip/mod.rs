//! Package-manager operations.
//!
//! Every pip call is a typed [`PipInvocation`] run through a
//! [`PackageManager`], which returns a [`CommandResult`] instead of raising.
//! Callers branch on `success` and decide what a non-zero exit means.
//!
//! - [`Pip`] runs `<python> -m pip ...` for real
//! - [`ScriptedPackageManager`] records calls and replays exit codes in tests

pub mod mock;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::environment::LaunchEnv;
use crate::error::Result;
use crate::runtime::PythonRuntime;
use crate::shell::{display_command, execute, CommandOptions, CommandResult};

pub use mock::ScriptedPackageManager;

static SHOW_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Version:\s*(\S+)\s*$").unwrap());

/// What pip is asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipAction {
    Install,
    Uninstall,
    Show,
}

impl fmt::Display for PipAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipAction::Install => write!(f, "install"),
            PipAction::Uninstall => write!(f, "uninstall"),
            PipAction::Show => write!(f, "show"),
        }
    }
}

/// A single pip operation on one package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PipInvocation {
    pub action: PipAction,
    pub package: String,
}

impl PipInvocation {
    pub fn install(package: &str) -> Self {
        Self {
            action: PipAction::Install,
            package: package.to_string(),
        }
    }

    pub fn uninstall(package: &str) -> Self {
        Self {
            action: PipAction::Uninstall,
            package: package.to_string(),
        }
    }

    pub fn show(package: &str) -> Self {
        Self {
            action: PipAction::Show,
            package: package.to_string(),
        }
    }

    /// Arguments passed to the interpreter, starting with `-m pip`.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec!["-m".to_string(), "pip".to_string(), self.action.to_string()];
        if self.action == PipAction::Uninstall {
            args.push("-y".to_string());
        }
        args.push(self.package.clone());
        args
    }
}

impl fmt::Display for PipInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pip {} {}", self.action, self.package)
    }
}

/// Runs pip operations.
pub trait PackageManager {
    /// Run `invocation` with `env` applied on top of the inherited environment.
    ///
    /// A non-zero exit is `Ok` with `success == false`. `Err` means the
    /// process could not be started at all.
    fn run(&mut self, invocation: &PipInvocation, env: &LaunchEnv) -> Result<CommandResult>;

    /// Human-readable command line for error messages.
    fn describe(&self, invocation: &PipInvocation) -> String {
        invocation.to_string()
    }
}

/// pip driven through a specific interpreter.
#[derive(Debug, Clone)]
pub struct Pip {
    runtime: PythonRuntime,
}

impl Pip {
    pub fn new(runtime: PythonRuntime) -> Self {
        Self { runtime }
    }

    pub fn runtime(&self) -> &PythonRuntime {
        &self.runtime
    }
}

impl PackageManager for Pip {
    fn run(&mut self, invocation: &PipInvocation, env: &LaunchEnv) -> Result<CommandResult> {
        // Install/uninstall output goes straight to the terminal; show is
        // captured so its metadata can be inspected.
        let capture = invocation.action == PipAction::Show;
        let options = CommandOptions {
            env: env.vars().clone(),
            capture_stdout: capture,
            capture_stderr: capture,
            ..Default::default()
        };

        let result = execute(self.runtime.program(), &invocation.args(), &options)?;

        if capture {
            if let Some(version) = installed_version(&result.stdout) {
                tracing::debug!("pip reports {} {}", invocation.package, version);
            } else if !result.success {
                tracing::debug!("pip show stderr: {}", result.stderr.trim());
            }
        }

        Ok(result)
    }

    fn describe(&self, invocation: &PipInvocation) -> String {
        display_command(self.runtime.program(), &invocation.args())
    }
}

/// The `Version:` field of `pip show` output.
pub fn installed_version(show_output: &str) -> Option<String> {
    SHOW_VERSION_RE
        .captures(show_output)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::PythonVersion;
    use std::path::PathBuf;

    #[test]
    fn install_args() {
        assert_eq!(
            PipInvocation::install("PyQt5").args(),
            vec!["-m", "pip", "install", "PyQt5"]
        );
    }

    #[test]
    fn uninstall_args_are_non_interactive() {
        assert_eq!(
            PipInvocation::uninstall("qtwidgets").args(),
            vec!["-m", "pip", "uninstall", "-y", "qtwidgets"]
        );
    }

    #[test]
    fn show_args() {
        assert_eq!(
            PipInvocation::show("PyQt5").args(),
            vec!["-m", "pip", "show", "PyQt5"]
        );
    }

    #[test]
    fn invocation_display() {
        assert_eq!(PipInvocation::show("PyQt5").to_string(), "pip show PyQt5");
    }

    #[test]
    fn installed_version_reads_show_output() {
        let output = "Name: PyQt5\nVersion: 5.15.10\nSummary: Python bindings for the Qt cross platform application toolkit\n";
        assert_eq!(installed_version(output), Some("5.15.10".to_string()));
    }

    #[test]
    fn installed_version_absent() {
        assert_eq!(
            installed_version("WARNING: Package(s) not found: PyQt5"),
            None
        );
    }

    #[test]
    fn pip_describe_includes_interpreter() {
        let pip = Pip::new(PythonRuntime::new(
            "/usr/bin/python3",
            "/usr",
            PythonVersion {
                major: 3,
                minor: 11,
            },
        ));
        assert_eq!(
            pip.describe(&PipInvocation::install("PyQt5")),
            "/usr/bin/python3 -m pip install PyQt5"
        );
        assert_eq!(pip.runtime().prefix, PathBuf::from("/usr"));
    }

    #[cfg(unix)]
    #[test]
    fn pip_passes_launch_env_to_interpreter() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let script = temp.path().join("python");
        std::fs::write(
            &script,
            "#!/bin/sh\necho \"Name: $4\"\necho \"Version: 1.0\"\necho \"Plugin: $QT_QPA_PLATFORM_PLUGIN_PATH\"\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut pip = Pip::new(PythonRuntime::new(
            &script,
            temp.path(),
            PythonVersion { major: 3, minor: 9 },
        ));
        let mut env = LaunchEnv::new();
        env.set("QT_QPA_PLATFORM_PLUGIN_PATH", "/plugins");

        let result = pip.run(&PipInvocation::show("PyQt5"), &env).unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("Name: PyQt5"));
        assert!(result.stdout.contains("Plugin: /plugins"));
    }

    #[cfg(unix)]
    #[test]
    fn pip_reports_non_zero_exit_as_unsuccessful() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let script = temp.path().join("python");
        std::fs::write(&script, "#!/bin/sh\nexit 1\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut pip = Pip::new(PythonRuntime::new(
            &script,
            temp.path(),
            PythonVersion { major: 3, minor: 9 },
        ));

        let result = pip
            .run(&PipInvocation::show("PyQt5"), &LaunchEnv::new())
            .unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
    }
}
