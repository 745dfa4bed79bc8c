// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script resolution: turn the script argument into config text

use crate::error::CliError;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Extension tried when the script argument has none
pub const DEFAULT_EXTENSION: &str = "cfg";

/// Name reported for a script read from stdin
pub const STDIN_NAME: &str = "<stdin>";

/// Loaded script text and the name used in diagnostics
#[derive(Debug)]
pub struct Script {
    pub name: String,
    pub text: String,
}

/// Load a script given as a path, a path without its `.cfg` suffix, or `-`
pub fn load_script(arg: &str) -> Result<Script, CliError> {
    if arg == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CliError::new("Failed to read script from stdin").with_context(e.to_string()))?;
        return Ok(Script {
            name: STDIN_NAME.to_string(),
            text,
        });
    }

    let tried = candidates(Path::new(arg));
    let path = tried
        .iter()
        .find(|p| p.is_file())
        .ok_or_else(|| CliError::script_not_found(arg, &tried))?;

    tracing::debug!(path = %path.display(), "loading script");
    let text = std::fs::read_to_string(path).map_err(|e| CliError::script_unreadable(path, e))?;

    Ok(Script {
        name: path.display().to_string(),
        text,
    })
}

fn candidates(path: &Path) -> Vec<PathBuf> {
    let mut paths = vec![path.to_path_buf()];
    if path.extension().is_none() {
        paths.push(path.with_extension(DEFAULT_EXTENSION));
    }
    paths
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
