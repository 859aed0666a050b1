//! Scripted package manager for tests.
//!
//! # Example
//!
//! ```
//! use pyqt_fixer::environment::LaunchEnv;
//! use pyqt_fixer::pip::{PackageManager, PipInvocation, ScriptedPackageManager};
//!
//! let mut pm = ScriptedPackageManager::new();
//! pm.set_exit_code(&PipInvocation::show("PyQt5"), 1);
//!
//! let result = pm.run(&PipInvocation::show("PyQt5"), &LaunchEnv::new()).unwrap();
//! assert!(!result.success);
//! assert_eq!(pm.calls().len(), 1);
//! ```

use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Duration;

use crate::environment::LaunchEnv;
use crate::error::{FixerError, Result};
use crate::shell::CommandResult;

use super::{PackageManager, PipInvocation};

/// A recorded call: the invocation and the environment it saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub invocation: PipInvocation,
    pub env: LaunchEnv,
}

/// Package manager that never spawns anything.
///
/// Every call succeeds unless an exit code was configured for it. Queued
/// codes are consumed first, then the fixed code, then `0`.
#[derive(Debug, Default)]
pub struct ScriptedPackageManager {
    calls: Vec<RecordedCall>,
    exit_codes: HashMap<PipInvocation, i32>,
    queued: HashMap<PipInvocation, VecDeque<i32>>,
    unspawnable: HashSet<PipInvocation>,
}

impl ScriptedPackageManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always exit with `code` for `invocation`.
    pub fn set_exit_code(&mut self, invocation: &PipInvocation, code: i32) {
        self.exit_codes.insert(invocation.clone(), code);
    }

    /// Exit with each of `codes` in turn for `invocation`.
    pub fn queue_exit_codes(&mut self, invocation: &PipInvocation, codes: Vec<i32>) {
        self.queued.insert(invocation.clone(), codes.into());
    }

    /// Make `invocation` fail to spawn.
    pub fn fail_to_spawn(&mut self, invocation: &PipInvocation) {
        self.unspawnable.insert(invocation.clone());
    }

    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    /// Invocations in call order.
    pub fn invocations(&self) -> Vec<PipInvocation> {
        self.calls.iter().map(|c| c.invocation.clone()).collect()
    }

    /// How many times `invocation` was run.
    pub fn count(&self, invocation: &PipInvocation) -> usize {
        self.calls
            .iter()
            .filter(|c| &c.invocation == invocation)
            .count()
    }
}

impl PackageManager for ScriptedPackageManager {
    fn run(&mut self, invocation: &PipInvocation, env: &LaunchEnv) -> Result<CommandResult> {
        self.calls.push(RecordedCall {
            invocation: invocation.clone(),
            env: env.clone(),
        });

        if self.unspawnable.contains(invocation) {
            return Err(FixerError::CommandFailed {
                command: self.describe(invocation),
                code: None,
            });
        }

        let code = self
            .queued
            .get_mut(invocation)
            .and_then(VecDeque::pop_front)
            .or_else(|| self.exit_codes.get(invocation).copied())
            .unwrap_or(0);

        if code == 0 {
            Ok(CommandResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            ))
        } else {
            Ok(CommandResult::failure(
                Some(code),
                String::new(),
                String::new(),
                Duration::ZERO,
            ))
        }
    }
}
