// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cmdconf kinds` - List the available command kinds

use crate::output::{self, KindList, OutputFormat};
use anyhow::Result;
use clap::Args;
use cmdconf_commands::{builtin_registry, CancelToken, NoOpSink};
use std::sync::Arc;

#[derive(Args)]
pub struct KindsArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub fn kinds(args: KindsArgs) -> Result<()> {
    let registry = builtin_registry(Arc::new(NoOpSink::new()), CancelToken::new());
    let kinds = KindList(registry.kinds().into_iter().map(String::from).collect());
    output::print(&kinds, args.format);
    Ok(())
}
