//! The repair routine.
//!
//! A linear state machine with no back-edges:
//!
//! 1. **Check**: install target and companion if the package directory is missing
//! 2. **Configure**: publish the plugin path, or stop with `PluginPathMissing`
//! 3. **Verify**: `pip show <target>`; success ends the run
//! 4. **Reinstall**: uninstall/install target, then companion (at most once)
//!
//! Re-verification after a reinstall only happens with
//! [`RepairOptions::reverify`].

use crate::checker::check_installation;
use crate::environment::{configure_plugin_path, LaunchEnv};
use crate::error::Result;
use crate::pip::{PackageManager, PipInvocation};
use crate::platform::{PackageLayout, Platform};
use crate::runlog::Reporter;
use crate::runtime::PythonRuntime;

use super::installer::{install_package, uninstall_package};
use super::{RepairOptions, RepairOutcome, RepairReport, TargetPackages};

/// Runs one repair against one interpreter.
pub struct RepairExecutor<'a> {
    layout: PackageLayout,
    packages: TargetPackages,
    options: RepairOptions,
    pm: &'a mut dyn PackageManager,
    env: LaunchEnv,
}

impl<'a> RepairExecutor<'a> {
    pub fn new(
        platform: Platform,
        runtime: &PythonRuntime,
        packages: TargetPackages,
        pm: &'a mut dyn PackageManager,
    ) -> Self {
        let layout = PackageLayout::new(
            platform,
            &runtime.prefix,
            runtime.version,
            &packages.target,
        );
        Self {
            layout,
            packages,
            options: RepairOptions::default(),
            pm,
            env: LaunchEnv::new(),
        }
    }

    pub fn with_options(mut self, options: RepairOptions) -> Self {
        self.options = options;
        self
    }

    pub fn layout(&self) -> &PackageLayout {
        &self.layout
    }

    /// Run the repair to completion.
    ///
    /// `Err` only for package-manager failures outside the verify step.
    pub fn run(mut self, reporter: &mut Reporter<'_>) -> Result<RepairReport> {
        let target = self.packages.target.clone();
        let mut report = RepairReport::new(RepairOutcome::Verified);

        // Check
        reporter.info(&format!("Checking {} installation...", target));
        if !check_installation(&self.layout).is_present() {
            tracing::debug!("{} missing, installing before configuration", target);
            report.installed_missing = true;
            self.install_all(reporter)?;
        }

        // Configure
        let Some(plugin_dir) = configure_plugin_path(
            &self.layout,
            &self.options.plugin_env_key,
            &mut self.env,
            reporter,
        ) else {
            reporter.error("Failed to set Qt plugin path.");
            report.outcome = RepairOutcome::PluginPathMissing {
                probed: self.layout.plugin_dir(),
            };
            return Ok(report);
        };
        report.plugin_dir = Some(plugin_dir);

        // Verify
        if self.verify()? {
            reporter.info(&format!("{} is installed correctly.", target));
        } else {
            // Reinstall
            reporter.info(&format!(
                "{} failed verification, reinstalling...",
                target
            ));
            self.reinstall_all(reporter)?;
            report.outcome = RepairOutcome::Reinstalled;

            if self.options.reverify {
                if self.verify()? {
                    reporter.info(&format!("{} verified after reinstall.", target));
                } else {
                    reporter.error(&format!(
                        "{} still fails verification after reinstall.",
                        target
                    ));
                    report.outcome = RepairOutcome::StillBroken;
                    return Ok(report);
                }
            }
        }

        reporter.info(&format!("{} has been fixed successfully!", target));
        Ok(report)
    }

    fn verify(&mut self) -> Result<bool> {
        let result = self
            .pm
            .run(&PipInvocation::show(&self.packages.target), &self.env)?;
        if !result.success {
            tracing::debug!(
                "pip show {} exited with {:?}",
                self.packages.target,
                result.exit_code
            );
        }
        Ok(result.success)
    }

    fn install_all(&mut self, reporter: &mut Reporter<'_>) -> Result<()> {
        for package in self.packages.all() {
            install_package(self.pm, &self.env, reporter, &package)?;
        }
        Ok(())
    }

    fn reinstall_all(&mut self, reporter: &mut Reporter<'_>) -> Result<()> {
        for package in self.packages.all() {
            reporter.info(&format!("Uninstalling {}...", package));
            uninstall_package(self.pm, &self.env, &package)?;
            reporter.info(&format!("Reinstalling {}...", package));
            install_package(self.pm, &self.env, reporter, &package)?;
        }
        Ok(())
    }
}
