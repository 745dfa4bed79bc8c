// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::{CancelToken, SharedSink};
use cmdconf_core::{Command, CommandError};

/// `clear`: discard everything printed so far
pub struct ClearCommand {
    sink: SharedSink,
    cancel: CancelToken,
}

impl ClearCommand {
    pub const KIND: &'static str = "clear";

    pub fn new(sink: SharedSink, cancel: CancelToken) -> Self {
        Self { sink, cancel }
    }
}

impl Command for ClearCommand {
    fn execute(&mut self) -> Result<(), CommandError> {
        if self.cancel.is_cancelled() {
            return Err(CommandError::Cancelled);
        }
        self.sink
            .clear()
            .map_err(|e| CommandError::Failed(e.to_string()))
    }
}
