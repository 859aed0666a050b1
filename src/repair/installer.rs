//! Install/uninstall helpers shared by every repair routine.

use crate::environment::LaunchEnv;
use crate::error::{FixerError, Result};
use crate::pip::{PackageManager, PipInvocation};
use crate::runlog::Reporter;
use crate::shell::CommandResult;

/// Run `invocation` and turn a non-zero exit into [`FixerError::CommandFailed`].
pub fn run_checked(
    pm: &mut dyn PackageManager,
    env: &LaunchEnv,
    invocation: &PipInvocation,
) -> Result<CommandResult> {
    let result = pm.run(invocation, env)?;
    if result.success {
        Ok(result)
    } else {
        Err(FixerError::CommandFailed {
            command: pm.describe(invocation),
            code: result.exit_code,
        })
    }
}

/// Install `package`, with a progress bar around the pip call.
pub fn install_package(
    pm: &mut dyn PackageManager,
    env: &LaunchEnv,
    reporter: &mut Reporter<'_>,
    package: &str,
) -> Result<()> {
    reporter.info(&format!("Installing package: {}", package));

    let label = format!("Installing {}...", package);
    let mut bar = reporter.progress_bar(&label);
    match run_checked(pm, env, &PipInvocation::install(package)) {
        Ok(_) => {
            bar.finish(&format!("{} Done.", label));
            Ok(())
        }
        Err(e) => {
            bar.abandon(&format!("{} Failed.", label));
            Err(e)
        }
    }
}

/// Uninstall `package` without prompting.
pub fn uninstall_package(
    pm: &mut dyn PackageManager,
    env: &LaunchEnv,
    package: &str,
) -> Result<()> {
    run_checked(pm, env, &PipInvocation::uninstall(package)).map(|_| ())
}
