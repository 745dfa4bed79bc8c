// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Command config parsing

mod line;
mod parser;
mod syntax;

pub use line::{parse_invocation, Invocation, LineError};
pub use parser::{parse_config, ParseError, Parser};
pub use syntax::{Syntax, SyntaxError};
