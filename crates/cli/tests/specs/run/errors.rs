// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script error specs
//!
//! Parse failures stop before anything runs; run failures stop the chain.

use crate::prelude::*;

#[test]
fn failing_command_stops_the_script() {
    let project = Project::empty();
    project.file(
        "broken.cfg",
        "print message=first\nfail message=nope\nprint message=never\n",
    );

    project
        .cmdconf()
        .args(&["run", "broken.cfg"])
        .fails()
        .stdout_eq("first\n")
        .stderr_has("broken.cfg:2: fail failed: nope");
}

#[test]
fn failure_inside_group_reports_inner_line() {
    let project = Project::empty();
    project.file(
        "nested.cfg",
        "print message=a\n{\n  {\n    fail\n  }\n  print message=b\n}\nprint message=c\n",
    );

    project
        .cmdconf()
        .args(&["run", "nested.cfg"])
        .fails()
        .stdout_eq("a\n")
        .stderr_has("nested.cfg:4: fail failed: command failed");
}

#[test]
fn unknown_kind_fails_before_running() {
    let project = Project::empty();
    project.file(
        "unknown.cfg",
        "print message=first\n\nwarp factor=9\n",
    );

    project
        .cmdconf()
        .args(&["run", "unknown.cfg"])
        .fails()
        .stdout_eq("")
        .stderr_has("line 3: unknown command kind: warp")
        .stderr_has("Available kinds: clear, delay, fail, print");
}

#[test]
fn unclosed_group_is_reported_at_its_open_marker() {
    let project = Project::empty();
    project.file("open.cfg", "print message=a\n{\nprint message=b\n");

    project
        .cmdconf()
        .args(&["run", "open.cfg"])
        .fails()
        .stdout_eq("")
        .stderr_has("line 2: group opened here is never closed");
}

#[test]
fn stray_close_is_reported() {
    let project = Project::empty();
    project.file("close.cfg", "print message=a\n}\n");

    project
        .cmdconf()
        .args(&["run", "close.cfg"])
        .fails()
        .stderr_has("line 2: group closed without a matching open");
}

#[test]
fn missing_parameter_fails_before_running() {
    let project = Project::empty();
    project.file("param.cfg", "print message=a\nprint\n");

    project
        .cmdconf()
        .args(&["run", "param.cfg"])
        .fails()
        .stdout_eq("")
        .stderr_has("missing required parameter: message");
}

#[test]
fn malformed_line_is_reported() {
    let project = Project::empty();
    project.file("quote.cfg", "print message=\"unterminated\n");

    project
        .cmdconf()
        .args(&["run", "quote.cfg"])
        .fails()
        .stderr_has("line 1: malformed line")
        .stderr_has("kind key=value");
}

#[test]
fn missing_script_lists_tried_paths() {
    let project = Project::empty();

    project
        .cmdconf()
        .args(&["run", "nowhere"])
        .fails()
        .stderr_has("Script 'nowhere' not found")
        .stderr_has("Tried nowhere.cfg");
}

#[test]
fn invalid_syntax_file_is_rejected() {
    let project = Project::empty();
    project.file("syntax.toml", "group_open = \"x\"\ngroup_close = \"x\"\n");
    project.file("ok.cfg", "print message=a\n");

    project
        .cmdconf()
        .args(&["--syntax", "syntax.toml", "run", "ok.cfg"])
        .fails()
        .stdout_eq("")
        .stderr_has("Invalid syntax definition");
}
