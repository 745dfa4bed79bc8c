// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs

#![allow(dead_code)]

pub use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Scratch directory holding scripts for one spec
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, name: &str, content: &str) -> &Self {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    /// The cmdconf binary, run from the project root
    pub fn cmdconf(&self) -> Cli {
        let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_cmdconf"));
        cmd.current_dir(self.dir.path()).env_remove("RUST_LOG");
        Cli { cmd }
    }
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    /// Run and expect exit code 0
    pub fn passes(mut self) -> Outcome {
        Outcome {
            assert: self.cmd.assert().success(),
        }
    }

    /// Run and expect a non-zero exit code
    pub fn fails(mut self) -> Outcome {
        Outcome {
            assert: self.cmd.assert().failure(),
        }
    }
}

pub struct Outcome {
    assert: assert_cmd::assert::Assert,
}

impl Outcome {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.assert.get_output().stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.assert.get_output().stderr).to_string()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        Self {
            assert: self.assert.stdout(predicate::str::contains(needle)),
        }
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        Self {
            assert: self.assert.stdout(predicate::str::contains(needle).not()),
        }
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        Self {
            assert: self.assert.stderr(predicate::str::contains(needle)),
        }
    }
}
