// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script-level errors rendered for the terminal
//!
//! A `CliError` is a headline plus `note:` lines explaining it and `help:`
//! lines saying what to try next, in the layout rustc uses.

use cmdconf_core::{CommandError, CommandRegistry, ConfigError};
use cmdconf_parser::{ParseError, SyntaxError};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub context: Vec<String>,
    pub suggestions: Vec<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, note: impl Into<String>) -> Self {
        self.context.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, help: impl Into<String>) -> Self {
        self.suggestions.push(help.into());
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;
        for note in &self.context {
            writeln!(f, "  note: {}", note)?;
        }
        for help in &self.suggestions {
            writeln!(f, "  help: {}", help)?;
        }
        Ok(())
    }
}

impl std::error::Error for CliError {}

/// Builders for the failures a script can run into.
impl CliError {
    /// The script argument did not resolve to a readable file.
    pub fn script_not_found(name: &str, tried: &[PathBuf]) -> Self {
        let mut err = CliError::new(format!("Script '{}' not found", name));
        for path in tried {
            err = err.with_context(format!("Tried {}", path.display()));
        }
        err.with_suggestion("Check the path, or pass '-' to read the script from stdin")
    }

    /// The script file exists but could not be read.
    pub fn script_unreadable(path: &Path, source: std::io::Error) -> Self {
        CliError::new(format!("Failed to read script {}", path.display()))
            .with_context(source.to_string())
    }

    /// The `--syntax` file could not be loaded.
    pub fn invalid_syntax(path: &Path, source: SyntaxError) -> Self {
        CliError::new(format!("Invalid syntax definition {}", path.display()))
            .with_context(source.to_string())
            .with_suggestion("Valid keys are group_open, group_close and comment_prefixes")
    }

    /// The script failed to parse.
    pub fn parse(script: &str, source: ParseError, registry: &CommandRegistry) -> Self {
        let mut err = CliError::new(format!("{}: {}", script, source));

        match &source {
            ParseError::UnknownKind { .. } => {
                err = err
                    .with_context(format!("Available kinds: {}", registry.kinds().join(", ")))
                    .with_suggestion("List command kinds with: cmdconf kinds");
            }
            ParseError::UnexpectedClose { .. } | ParseError::UnclosedGroup { .. } => {
                err = err.with_suggestion(
                    "Check that every group open marker has a matching close marker",
                );
            }
            ParseError::Malformed { .. } => {
                err = err.with_suggestion(
                    "Commands are written as: kind key=value key=\"quoted value\"",
                );
            }
            ParseError::Configuration { source: config, .. } => {
                if let ConfigError::NotConfigurable(_) = config {
                    err = err.with_context("This command kind takes no parameters");
                }
            }
        }

        err
    }

    /// The script parsed but a command failed while running.
    pub fn run_failed(script: &str, source: CommandError) -> Self {
        let message = match source.location() {
            Some((kind, line)) => format!(
                "{}:{}: {} failed: {}",
                script,
                line,
                kind,
                source.root_cause()
            ),
            None => format!("{}: {}", script, source),
        };

        let mut err = CliError::new(message);
        if matches!(source.root_cause(), CommandError::Cancelled) {
            err = err.with_context("The run was interrupted");
        } else {
            err = err.with_context("Commands after the failing one were not run");
        }
        err
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
