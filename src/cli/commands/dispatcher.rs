//! Command dispatching.
//!
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing the resolved [`Action`]

use crate::cli::args::Action;
use crate::config::FixerConfig;
use crate::error::Result;
use crate::runlog::Reporter;

use super::fix::FixCommand;
use super::guide::GuideCommand;

/// Logged when no action flag was given.
pub const NO_ACTION_MESSAGE: &str =
    "No valid option selected. Use --fix for Windows or --fix_linux for Linux.";

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, reporting progress through `reporter`.
    fn execute(&self, reporter: &mut Reporter<'_>) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches the CLI action to its command.
pub struct CommandDispatcher {
    config: FixerConfig,
}

impl CommandDispatcher {
    pub fn new(config: FixerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FixerConfig {
        &self.config
    }

    /// Dispatch and execute `action`.
    ///
    /// A missing action is reported as an error but still exits 0.
    pub fn dispatch(&self, action: Action, reporter: &mut Reporter<'_>) -> Result<CommandResult> {
        match action {
            Action::Guide => GuideCommand::new().execute(reporter),
            Action::Fix(platform) => FixCommand::new(platform, self.config.clone()).execute(reporter),
            Action::None => {
                reporter.error(NO_ACTION_MESSAGE);
                Ok(CommandResult::success())
            }
        }
    }
}
