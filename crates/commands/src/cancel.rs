// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cooperative cancellation for leaf commands
//!
//! Groups never cancel anything themselves. Leaf commands that hold a token
//! check it before reporting success, and suspended commands wake up early
//! when it fires, so a cancelled run ends with `CommandError::Cancelled`.

use tokio_util::sync::CancellationToken;

/// Shared cancellation flag handed to every leaf command of one run
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    inner: CancellationToken,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel; safe to call from any thread, repeatedly
    pub fn cancel(&self) {
        if !self.inner.is_cancelled() {
            tracing::info!("cancellation requested");
        }
        self.inner.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.is_cancelled()
    }

    /// Resolves once `cancel` has been called
    pub async fn cancelled(&self) {
        self.inner.cancelled().await
    }
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod tests;
