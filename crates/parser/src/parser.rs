// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config text → command tree

use crate::{parse_invocation, LineError, Syntax};
use cmdconf_core::{CommandGroup, CommandRegistry, ConfigError, Node};
use thiserror::Error;

/// Errors that can occur during config parsing
///
/// Every variant carries the 1-based line it was raised on. A failed parse
/// never yields a partial tree.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("line {line}: unknown command kind: {kind}")]
    UnknownKind { kind: String, line: usize },
    #[error("line {line}: group closed without a matching open")]
    UnexpectedClose { line: usize },
    #[error("line {line}: group opened here is never closed")]
    UnclosedGroup { line: usize },
    #[error("line {line}: malformed line: {source}")]
    Malformed { line: usize, source: LineError },
    #[error("line {line}: invalid configuration for {kind}: {source}")]
    Configuration {
        kind: String,
        line: usize,
        source: ConfigError,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnknownKind { line, .. }
            | ParseError::UnexpectedClose { line }
            | ParseError::UnclosedGroup { line }
            | ParseError::Malformed { line, .. }
            | ParseError::Configuration { line, .. } => *line,
        }
    }

    /// Whether this is an open/close marker mismatch
    pub fn is_unbalanced(&self) -> bool {
        matches!(
            self,
            ParseError::UnexpectedClose { .. } | ParseError::UnclosedGroup { .. }
        )
    }
}

/// Parses config text against a fixed set of command kinds
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    registry: &'a CommandRegistry,
    syntax: Syntax,
}

impl<'a> Parser<'a> {
    pub fn new(registry: &'a CommandRegistry) -> Self {
        Self::with_syntax(registry, Syntax::default())
    }

    /// Use custom group markers and comment prefixes
    ///
    /// The syntax is used as given; call [`Syntax::validate`] first when it
    /// comes from an untrusted source.
    pub fn with_syntax(registry: &'a CommandRegistry, syntax: Syntax) -> Self {
        Self { registry, syntax }
    }

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Parse config text into a root group
    pub fn parse(&self, text: &str) -> Result<CommandGroup, ParseError> {
        let mut state = ParseState::default();

        for (index, raw) in text.lines().enumerate() {
            state.line = index + 1;
            let line = raw.trim();

            if line.is_empty() || self.syntax.is_comment(line) {
                continue;
            }

            if line == self.syntax.group_open {
                state.open_group();
            } else if line == self.syntax.group_close {
                state.close_group()?;
            } else {
                let node = self.parse_command(line, state.line)?;
                state.current().push(node);
            }
        }

        let root = state.finish()?;
        tracing::debug!(
            commands = root.command_count(),
            depth = root.depth(),
            "parsed config"
        );
        Ok(root)
    }

    fn parse_command(&self, text: &str, line: usize) -> Result<Node, ParseError> {
        let invocation =
            parse_invocation(text).map_err(|source| ParseError::Malformed { line, source })?;

        let command = self
            .registry
            .construct(&invocation.kind, &invocation.params)
            .ok_or_else(|| ParseError::UnknownKind {
                kind: invocation.kind.clone(),
                line,
            })?
            .map_err(|source| ParseError::Configuration {
                kind: invocation.kind.clone(),
                line,
                source,
            })?;

        tracing::debug!(
            line,
            kind = %invocation.kind,
            params = invocation.params.len(),
            "command"
        );
        Ok(Node::leaf(invocation.kind, line, command))
    }
}

/// Parse config text with the default syntax
pub fn parse_config(text: &str, registry: &CommandRegistry) -> Result<CommandGroup, ParseError> {
    Parser::new(registry).parse(text)
}

/// Per-call parser state
#[derive(Default)]
struct ParseState {
    line: usize,
    /// Open groups, innermost last, with the line that opened each
    open: Vec<(usize, CommandGroup)>,
    root: CommandGroup,
}

impl ParseState {
    fn current(&mut self) -> &mut CommandGroup {
        match self.open.last_mut() {
            Some((_, group)) => group,
            None => &mut self.root,
        }
    }

    fn open_group(&mut self) {
        self.open.push((self.line, CommandGroup::new()));
    }

    fn close_group(&mut self) -> Result<(), ParseError> {
        let (opened_at, group) = self
            .open
            .pop()
            .ok_or(ParseError::UnexpectedClose { line: self.line })?;
        self.current().push(Node::group(opened_at, group));
        Ok(())
    }

    fn finish(self) -> Result<CommandGroup, ParseError> {
        // report the outermost unclosed group
        if let Some((opened_at, _)) = self.open.first() {
            return Err(ParseError::UnclosedGroup { line: *opened_at });
        }
        Ok(self.root)
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
