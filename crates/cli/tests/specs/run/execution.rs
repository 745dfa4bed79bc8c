// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script execution specs
//!
//! Verify scripts run their commands in order and complete.

use crate::prelude::*;
use std::time::{Duration, Instant};

const GREETING: &str = r#"
# a tiny tutorial
print message="Hello"
{
    print message="inside the group"
    delay seconds=0.01
}
print message="Done"
"#;

#[test]
fn run_prints_in_declaration_order() {
    let project = Project::empty();
    project.file("greeting.cfg", GREETING);

    project
        .cmdconf()
        .args(&["run", "greeting.cfg"])
        .passes()
        .stdout_eq("Hello\ninside the group\nDone\n");
}

#[test]
fn run_resolves_implied_extension() {
    let project = Project::empty();
    project.file("greeting.cfg", GREETING);

    project
        .cmdconf()
        .args(&["run", "greeting"])
        .passes()
        .stdout_has("Done");
}

#[test]
fn run_reads_stdin() {
    let project = Project::empty();

    project
        .cmdconf()
        .args(&["run", "-"])
        .stdin("print message=piped\n")
        .passes()
        .stdout_eq("piped\n");
}

#[test]
fn run_quiet_discards_output() {
    let project = Project::empty();
    project.file("greeting.cfg", GREETING);

    project
        .cmdconf()
        .args(&["run", "--quiet", "greeting.cfg"])
        .passes()
        .stdout_eq("");
}

#[test]
fn delay_holds_back_the_next_command() {
    let project = Project::empty();
    project.file(
        "wait.cfg",
        "print message=before\ndelay duration=200ms\nprint message=after\n",
    );

    let start = Instant::now();
    project
        .cmdconf()
        .args(&["run", "wait.cfg"])
        .passes()
        .stdout_eq("before\nafter\n");
    assert!(start.elapsed() >= Duration::from_millis(200));
}

#[test]
fn empty_script_succeeds() {
    let project = Project::empty();
    project.file("empty.cfg", "# nothing to do\n\n");

    project
        .cmdconf()
        .args(&["run", "empty.cfg"])
        .passes()
        .stdout_eq("");
}

#[test]
fn custom_syntax_file() {
    let project = Project::empty();
    project.file(
        "syntax.toml",
        "group_open = \"begin\"\ngroup_close = \"end\"\ncomment_prefixes = [\";\"]\n",
    );
    project.file(
        "blocks.cfg",
        "; comment\nbegin\nprint message=nested\nend\nprint message=top\n",
    );

    project
        .cmdconf()
        .args(&["--syntax", "syntax.toml", "run", "blocks.cfg"])
        .passes()
        .stdout_eq("nested\ntop\n");
}

#[test]
fn verbose_logs_go_to_stderr() {
    let project = Project::empty();
    project.file("one.cfg", "print message=hi\n");

    project
        .cmdconf()
        .args(&["-v", "run", "one.cfg"])
        .passes()
        .stdout_eq("hi\n")
        .stderr_has("parsed config");
}

#[test]
fn log_file_receives_logs() {
    let project = Project::empty();
    project.file("one.cfg", "print message=hi\n");

    project
        .cmdconf()
        .args(&["-v", "--log-file", "logs/run.log", "run", "one.cfg"])
        .passes()
        .stdout_eq("hi\n");

    let logs = std::fs::read_to_string(project.path().join("logs/run.log")).unwrap();
    assert!(logs.contains("script completed"), "logs: {}", logs);
}
