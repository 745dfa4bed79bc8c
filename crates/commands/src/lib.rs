// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Built-in command kinds and their output adapters

pub mod builtin;
pub mod cancel;
pub mod sink;

pub use builtin::{builtin_registry, ClearCommand, DelayCommand, FailCommand, PrintCommand};
pub use cancel::CancelToken;
pub use sink::{NoOpSink, OutputError, OutputSink, SharedSink, StdoutSink};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use sink::{FakeSink, SinkCall};
