// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cmdconf run <script>` - Parse and run a script

use crate::error::CliError;
use crate::script::load_script;
use anyhow::Result;
use clap::Args;
use cmdconf_commands::{builtin_registry, CancelToken, NoOpSink, SharedSink, StdoutSink};
use cmdconf_parser::{Parser, Syntax};
use std::sync::Arc;
use tokio::sync::oneshot;

#[derive(Args)]
pub struct RunArgs {
    /// Script path, path without the .cfg suffix, or - for stdin
    pub script: String,

    /// Discard printed output
    #[arg(short, long)]
    pub quiet: bool,
}

pub async fn run(args: RunArgs, syntax: Syntax) -> Result<()> {
    let script = load_script(&args.script)?;

    let sink: SharedSink = if args.quiet {
        Arc::new(NoOpSink::new())
    } else {
        Arc::new(StdoutSink::new())
    };
    let cancel = CancelToken::new();
    let registry = builtin_registry(sink, cancel.clone());

    let mut root = Parser::with_syntax(&registry, syntax)
        .parse(&script.text)
        .map_err(|e| CliError::parse(&script.name, e, &registry))?;

    {
        let cancel = cancel.clone();
        ctrlc::set_handler(move || cancel.cancel())?;
    }

    tracing::info!(
        script = %script.name,
        commands = root.command_count(),
        "running script"
    );
    let start = std::time::Instant::now();

    let (tx, rx) = oneshot::channel();
    root.run_then(move |result| {
        let _ = tx.send(result);
    })
    .await;
    let result = rx.await?;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    match result {
        Ok(()) => {
            tracing::info!(elapsed_ms, "script completed");
            Ok(())
        }
        Err(e) => {
            tracing::error!(elapsed_ms, error = %e, "script failed");
            Err(CliError::run_failed(&script.name, e).into())
        }
    }
}
