// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{OutputError, OutputSink};
use std::io::{IsTerminal, Write};

/// Writes lines to standard output
///
/// `clear` resets the terminal when stdout is one and prints nothing otherwise,
/// so piped output stays plain.
#[derive(Clone, Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    fn write_line(&self, line: &str) -> Result<(), OutputError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }

    fn clear(&self) -> Result<(), OutputError> {
        let mut out = std::io::stdout().lock();
        if out.is_terminal() {
            // ANSI: erase display, cursor home
            write!(out, "\x1b[2J\x1b[H")?;
            out.flush()?;
        }
        Ok(())
    }
}
