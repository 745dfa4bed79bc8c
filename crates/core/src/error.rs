// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for configuring and running commands

use thiserror::Error;

/// Errors raised by a configurable command while it is being parsed
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required parameter: {0}")]
    MissingParameter(String),
    #[error("invalid value {value:?} for parameter {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
    #[error("command takes no parameters, got: {0}")]
    NotConfigurable(String),
}

/// Errors reported when a command runs
///
/// These travel through the completion result rather than unwinding, so a
/// group can observe a child's failure and stop its chain.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Failed(String),
    #[error("cancelled")]
    Cancelled,
    #[error("command group has already completed")]
    AlreadyCompleted,
    /// A previous run was started but never finished, e.g. its future was dropped
    #[error("command group was already started and cannot be run again")]
    AlreadyStarted,
    #[error("{kind} (line {line}): {source}")]
    At {
        kind: String,
        line: usize,
        source: Box<CommandError>,
    },
}

impl CommandError {
    /// Kind and source line of the command that failed, if known
    pub fn location(&self) -> Option<(&str, usize)> {
        match self {
            CommandError::At { kind, line, .. } => Some((kind.as_str(), *line)),
            _ => None,
        }
    }

    /// The failure without any location wrapping
    pub fn root_cause(&self) -> &CommandError {
        let mut current = self;
        while let CommandError::At { source, .. } = current {
            current = source;
        }
        current
    }

    /// Attach a location unless one is already present
    pub(crate) fn located(self, kind: &str, line: usize) -> Self {
        match self {
            located @ CommandError::At { .. } => located,
            other => CommandError::At {
                kind: kind.to_string(),
                line,
                source: Box::new(other),
            },
        }
    }
}
