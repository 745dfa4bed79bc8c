// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command capability contracts

use crate::{CommandError, ConfigError, Params};
use async_trait::async_trait;

/// A command that may suspend before it completes.
///
/// `run` resolves exactly once per invocation, with `Ok(())` on success or a
/// command-specific failure. Groups implement this trait too, so a group can
/// stand anywhere a single command is expected.
#[async_trait]
pub trait AsyncCommand: Send {
    async fn run(&mut self) -> Result<(), CommandError>;
}

/// A command whose effect completes before `execute` returns.
///
/// Every `Command` is also an [`AsyncCommand`] that resolves on first poll.
pub trait Command: Send {
    fn execute(&mut self) -> Result<(), CommandError>;
}

#[async_trait]
impl<C: Command> AsyncCommand for C {
    async fn run(&mut self) -> Result<(), CommandError> {
        self.execute()
    }
}

/// A command that accepts textual parameters from its source line.
///
/// Called once while parsing, strictly before the command is first run.
pub trait Configurable {
    fn configure(&mut self, params: &Params) -> Result<(), ConfigError>;
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
