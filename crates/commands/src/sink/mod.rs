// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output sinks: where printed lines go

mod noop;
mod stdout;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use noop::NoOpSink;
pub use stdout::StdoutSink;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSink, SinkCall};

use std::sync::Arc;
use thiserror::Error;

/// Errors from output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("output closed")]
    Closed,
}

/// Destination for command output
pub trait OutputSink: Send + Sync {
    /// Append one line of output
    fn write_line(&self, line: &str) -> Result<(), OutputError>;

    /// Discard everything written so far
    fn clear(&self) -> Result<(), OutputError>;
}

/// Sink shared between every command built from one registry
pub type SharedSink = Arc<dyn OutputSink>;
