//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and reports through a
//! [`Reporter`](crate::runlog::Reporter), so everything it says lands in the
//! run log as well as on the terminal.

pub mod dispatcher;
pub mod fix;
pub mod guide;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, NO_ACTION_MESSAGE};
pub use fix::FixCommand;
pub use guide::{GuideCommand, GUIDE_TEXT};
