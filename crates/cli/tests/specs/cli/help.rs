// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help, kinds and completions specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    let project = Project::empty();

    project
        .cmdconf()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("check")
        .stdout_has("kinds")
        .stdout_has("completions");
}

#[test]
fn kinds_lists_builtin_kinds() {
    let project = Project::empty();

    project
        .cmdconf()
        .args(&["kinds"])
        .passes()
        .stdout_eq("clear\ndelay\nfail\nprint\n");
}

#[test]
fn kinds_json() {
    let project = Project::empty();

    project
        .cmdconf()
        .args(&["kinds", "--format", "json"])
        .passes()
        .stdout_has("\"print\"");
}

#[test]
fn completions_for_bash() {
    let project = Project::empty();

    project
        .cmdconf()
        .args(&["completions", "bash"])
        .passes()
        .stdout_has("cmdconf");
}

#[test]
fn missing_subcommand_fails() {
    let project = Project::empty();

    project
        .cmdconf()
        .args(&[])
        .fails()
        .stdout_lacks("Hello");
}
