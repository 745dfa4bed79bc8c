// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::{CancelToken, SharedSink};
use cmdconf_core::{Command, CommandError, ConfigError, Configurable, Params};

/// `print message=<text>`: write one line to the output sink
pub struct PrintCommand {
    sink: SharedSink,
    cancel: CancelToken,
    message: String,
}

impl PrintCommand {
    pub const KIND: &'static str = "print";

    pub fn new(sink: SharedSink, cancel: CancelToken) -> Self {
        Self {
            sink,
            cancel,
            message: String::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Configurable for PrintCommand {
    fn configure(&mut self, params: &Params) -> Result<(), ConfigError> {
        params.deny_unknown(&["message"])?;
        self.message = params.require("message")?.to_string();
        Ok(())
    }
}

impl Command for PrintCommand {
    fn execute(&mut self) -> Result<(), CommandError> {
        if self.cancel.is_cancelled() {
            return Err(CommandError::Cancelled);
        }
        self.sink
            .write_line(&self.message)
            .map_err(|e| CommandError::Failed(e.to_string()))
    }
}

#[cfg(test)]
#[path = "print_tests.rs"]
mod tests;
