//! Command-line interface for the fixer.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Action, Cli};
pub use commands::{Command, CommandDispatcher, CommandResult};
