// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command invocation lines: `<kind> <key>=<value> ...`

use cmdconf_core::Params;
use regex::Regex;
use std::iter::Peekable;
use std::str::Chars;
use std::sync::LazyLock;
use thiserror::Error;

// Kind names and parameter keys share one identifier grammar
#[allow(clippy::expect_used)]
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").expect("constant regex pattern is valid")
});

/// Errors that can occur splitting an invocation line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("invalid command kind: {0:?}")]
    InvalidKind(String),
    #[error("expected key=value, found {0:?}")]
    MissingEquals(String),
    #[error("empty parameter name")]
    EmptyKey,
    #[error("invalid parameter name: {0:?}")]
    InvalidKey(String),
    #[error("duplicate parameter: {0}")]
    DuplicateKey(String),
    #[error("unterminated quote in value of {0}")]
    UnterminatedQuote(String),
    #[error("unexpected characters after quoted value of {0}")]
    TrailingCharacters(String),
}

/// A parsed invocation line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub kind: String,
    pub params: Params,
}

/// Split a line into its command kind and parameters
///
/// Values are either bare (`seconds=2`) or double-quoted
/// (`message="hello world"`). Inside quotes `\"`, `\\`, `\n` and `\t` are
/// escapes; any other backslash is kept literally.
pub fn parse_invocation(line: &str) -> Result<Invocation, LineError> {
    let line = line.trim();
    let (kind, rest) = match line.find(char::is_whitespace) {
        Some(pos) => (&line[..pos], &line[pos..]),
        None => (line, ""),
    };

    if !NAME_PATTERN.is_match(kind) {
        return Err(LineError::InvalidKind(kind.to_string()));
    }

    let mut params = Params::new();
    let mut chars = rest.chars().peekable();

    loop {
        skip_whitespace(&mut chars);
        if chars.peek().is_none() {
            break;
        }

        let mut key = String::new();
        while let Some(&c) = chars.peek() {
            if c == '=' || c.is_whitespace() {
                break;
            }
            key.push(c);
            chars.next();
        }

        if chars.next_if_eq(&'=').is_none() {
            return Err(LineError::MissingEquals(key));
        }
        if key.is_empty() {
            return Err(LineError::EmptyKey);
        }
        if !NAME_PATTERN.is_match(&key) {
            return Err(LineError::InvalidKey(key));
        }

        let value = if chars.next_if_eq(&'"').is_some() {
            let value = read_quoted(&mut chars)
                .ok_or_else(|| LineError::UnterminatedQuote(key.clone()))?;
            if chars.peek().is_some_and(|c| !c.is_whitespace()) {
                return Err(LineError::TrailingCharacters(key));
            }
            value
        } else {
            let mut value = String::new();
            while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                value.push(c);
            }
            value
        };

        if params.insert(key.clone(), value).is_some() {
            return Err(LineError::DuplicateKey(key));
        }
    }

    Ok(Invocation {
        kind: kind.to_string(),
        params,
    })
}

fn skip_whitespace(chars: &mut Peekable<Chars>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

/// Read up to the closing quote; `None` if the line ends first
fn read_quoted(chars: &mut Peekable<Chars>) -> Option<String> {
    let mut value = String::new();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Some(value),
            '\\' => match chars.next()? {
                '"' => value.push('"'),
                '\\' => value.push('\\'),
                'n' => value.push('\n'),
                't' => value.push('\t'),
                other => {
                    value.push('\\');
                    value.push(other);
                }
            },
            c => value.push(c),
        }
    }
    None
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
