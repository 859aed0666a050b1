//! The `--fix` / `--fix_linux` commands.

use crate::config::FixerConfig;
use crate::error::Result;
use crate::pip::{PackageManager, Pip};
use crate::platform::Platform;
use crate::repair::RepairExecutor;
use crate::runlog::Reporter;
use crate::runtime::PythonRuntime;

use super::dispatcher::{Command, CommandResult};

/// Repairs the target package for one platform layout.
pub struct FixCommand {
    platform: Platform,
    config: FixerConfig,
}

impl FixCommand {
    pub fn new(platform: Platform, config: FixerConfig) -> Self {
        Self { platform, config }
    }

    /// Run the repair against an already located interpreter.
    pub fn run_with(
        &self,
        runtime: &PythonRuntime,
        pm: &mut dyn PackageManager,
        reporter: &mut Reporter<'_>,
    ) -> Result<CommandResult> {
        let report = RepairExecutor::new(self.platform, runtime, self.config.packages(), pm)
            .with_options(self.config.repair_options())
            .run(reporter)?;

        tracing::debug!("Repair finished: {:?}", report);

        if report.outcome.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

impl Command for FixCommand {
    fn execute(&self, reporter: &mut Reporter<'_>) -> Result<CommandResult> {
        reporter.info(&format!(
            "Starting {} fix for {}...",
            self.config.package, self.platform
        ));

        if Platform::host() != Some(self.platform) {
            tracing::warn!(
                "Using the {} layout on a different host platform",
                self.platform
            );
        }

        let runtime = PythonRuntime::discover(self.config.python.as_deref())?;
        let mut pip = Pip::new(runtime.clone());
        self.run_with(&runtime, &mut pip, reporter)
    }
}
