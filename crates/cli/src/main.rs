// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cmdconf - run command config scripts

mod commands;
mod completions;
mod error;
mod output;
mod script;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use cmdconf_parser::Syntax;
use commands::{check, kinds, run};
use completions::CompletionsArgs;
use error::CliError;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "cmdconf",
    version,
    about = "cmdconf - compile and run command config scripts"
)]
struct Cli {
    /// Syntax definition (TOML) overriding group markers and comment prefixes
    #[arg(long, global = true, value_name = "FILE")]
    syntax: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and run a script
    Run(run::RunArgs),
    /// Parse a script and show its command tree without running it
    Check(check::CheckArgs),
    /// List the available command kinds
    Kinds(kinds::KindsArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match setup_logging(cli.verbose, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: failed to set up logging: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match dispatch(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(cli_err) => eprint!("{}", cli_err),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    if let Commands::Completions(args) = cli.command {
        completions::generate_completions::<Cli>(args.shell);
        return Ok(());
    }

    let syntax = load_syntax(cli.syntax.as_deref())?;

    match cli.command {
        Commands::Run(args) => run::run(args, syntax).await,
        Commands::Check(args) => check::check(args, syntax),
        Commands::Kinds(args) => kinds::kinds(args),
        Commands::Completions(_) => Ok(()),
    }
}

fn load_syntax(path: Option<&Path>) -> Result<Syntax, CliError> {
    match path {
        Some(path) => Syntax::load(path).map_err(|e| CliError::invalid_syntax(path, e)),
        None => Ok(Syntax::default()),
    }
}

fn setup_logging(
    verbose: u8,
    log_file: Option<&Path>,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let Some(path) = log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .init();
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log file path has no file name: {}", path.display()))?;

    let (non_blocking, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(Some(guard))
}
