// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cmdconf check <script>` - Parse a script without running it

use crate::error::CliError;
use crate::output::{self, OutputFormat, TreeView};
use crate::script::load_script;
use anyhow::Result;
use clap::Args;
use cmdconf_commands::{builtin_registry, CancelToken, NoOpSink};
use cmdconf_parser::{Parser, Syntax};
use std::sync::Arc;

#[derive(Args)]
pub struct CheckArgs {
    /// Script path, path without the .cfg suffix, or - for stdin
    pub script: String,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub fn check(args: CheckArgs, syntax: Syntax) -> Result<()> {
    let script = load_script(&args.script)?;
    let registry = builtin_registry(Arc::new(NoOpSink::new()), CancelToken::new());

    let root = Parser::with_syntax(&registry, syntax)
        .parse(&script.text)
        .map_err(|e| CliError::parse(&script.name, e, &registry))?;

    output::print(&TreeView::new(&script.name, &root), args.format);
    Ok(())
}
