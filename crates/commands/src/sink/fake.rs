// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake output sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{OutputError, OutputSink};
use std::sync::{Arc, Mutex};

/// Recorded sink operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    WriteLine(String),
    Clear,
}

#[derive(Default)]
struct FakeState {
    calls: Vec<SinkCall>,
    lines: Vec<String>,
    closed: bool,
}

/// Fake output sink for testing
///
/// Clones share state, so a test can keep one handle while the commands own
/// another.
#[derive(Clone, Default)]
pub struct FakeSink {
    inner: Arc<Mutex<FakeState>>,
}

impl FakeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation in call order
    pub fn calls(&self) -> Vec<SinkCall> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Lines currently visible (everything since the last clear)
    pub fn lines(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .lines
            .clone()
    }

    /// Make every further operation fail with `OutputError::Closed`
    pub fn close(&self) {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).closed = true;
    }
}

impl OutputSink for FakeSink {
    fn write_line(&self, line: &str) -> Result<(), OutputError> {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if state.closed {
            return Err(OutputError::Closed);
        }
        state.calls.push(SinkCall::WriteLine(line.to_string()));
        state.lines.push(line.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), OutputError> {
        let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if state.closed {
            return Err(OutputError::Closed);
        }
        state.calls.push(SinkCall::Clear);
        state.lines.clear();
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
