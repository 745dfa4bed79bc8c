// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Surface syntax of the config language

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur loading or validating a syntax definition
#[derive(Debug, Error)]
pub enum SyntaxError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid syntax definition: {0}")]
    Invalid(String),
}

/// Group markers and comment prefixes recognized by the parser
///
/// A line equal to `group_open` (after trimming) opens a nested group, a line
/// equal to `group_close` closes it. Lines starting with any comment prefix
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Syntax {
    pub group_open: String,
    pub group_close: String,
    pub comment_prefixes: Vec<String>,
}

impl Default for Syntax {
    fn default() -> Self {
        Self {
            group_open: "{".to_string(),
            group_close: "}".to_string(),
            comment_prefixes: vec!["#".to_string(), "//".to_string()],
        }
    }
}

impl Syntax {
    /// Parse a syntax definition from TOML, filling omitted fields with defaults
    pub fn from_toml(content: &str) -> Result<Self, SyntaxError> {
        let syntax: Syntax = toml::from_str(content)?;
        syntax.validate()?;
        Ok(syntax)
    }

    /// Load a syntax definition from a TOML file
    pub fn load(path: &Path) -> Result<Self, SyntaxError> {
        let content = std::fs::read_to_string(path).map_err(|source| SyntaxError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), SyntaxError> {
        let open = self.group_open.trim();
        let close = self.group_close.trim();

        if open.is_empty() || close.is_empty() {
            return Err(SyntaxError::Invalid(
                "group markers must not be empty".to_string(),
            ));
        }
        if open != self.group_open || close != self.group_close {
            return Err(SyntaxError::Invalid(
                "group markers must not have surrounding whitespace".to_string(),
            ));
        }
        if open == close {
            return Err(SyntaxError::Invalid(format!(
                "open and close markers are both {:?}",
                open
            )));
        }
        if let Some(prefix) = self.comment_prefixes.iter().find(|p| p.trim().is_empty()) {
            return Err(SyntaxError::Invalid(format!(
                "empty comment prefix: {:?}",
                prefix
            )));
        }
        for marker in [open, close] {
            if self.is_comment(marker) {
                return Err(SyntaxError::Invalid(format!(
                    "group marker {:?} starts with a comment prefix",
                    marker
                )));
            }
        }
        Ok(())
    }

    /// Whether a trimmed line is a comment
    pub fn is_comment(&self, line: &str) -> bool {
        self.comment_prefixes
            .iter()
            .any(|prefix| line.starts_with(prefix.as_str()))
    }
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
