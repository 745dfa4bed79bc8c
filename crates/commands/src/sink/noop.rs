// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{OutputError, OutputSink};

/// Discards all output
#[derive(Clone, Debug, Default)]
pub struct NoOpSink;

impl NoOpSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for NoOpSink {
    fn write_line(&self, _line: &str) -> Result<(), OutputError> {
        Ok(())
    }

    fn clear(&self) -> Result<(), OutputError> {
        Ok(())
    }
}
