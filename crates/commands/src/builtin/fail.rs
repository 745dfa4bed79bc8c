// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use cmdconf_core::{Command, CommandError, ConfigError, Configurable, Params};

/// `fail [message=<text>]`: always fails
#[derive(Debug, Default)]
pub struct FailCommand {
    message: Option<String>,
}

impl FailCommand {
    pub const KIND: &'static str = "fail";
}

impl Configurable for FailCommand {
    fn configure(&mut self, params: &Params) -> Result<(), ConfigError> {
        params.deny_unknown(&["message"])?;
        self.message = params.get("message").map(str::to_string);
        Ok(())
    }
}

impl Command for FailCommand {
    fn execute(&mut self) -> Result<(), CommandError> {
        Err(CommandError::Failed(
            self.message
                .clone()
                .unwrap_or_else(|| "command failed".to_string()),
        ))
    }
}
