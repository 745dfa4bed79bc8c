// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Check specs
//!
//! `check` parses without running and shows the command tree.

use crate::prelude::*;

const SCRIPT: &str = "print message=a\n{\n  delay seconds=60\n  fail\n}\nclear\n";

#[test]
fn check_prints_tree_without_running() {
    let project = Project::empty();
    project.file("tree.cfg", SCRIPT);

    project
        .cmdconf()
        .args(&["check", "tree.cfg"])
        .passes()
        .stdout_eq(
            "tree.cfg: ok (4 commands, depth 1)\n    1  print\n    2  group\n    3    delay\n    4    fail\n    6  clear\n",
        );
}

#[test]
fn check_json_output() {
    let project = Project::empty();
    project.file("tree.cfg", SCRIPT);

    let outcome = project
        .cmdconf()
        .args(&["check", "--format", "json", "tree.cfg"])
        .passes();

    let json: serde_json::Value = serde_json::from_str(&outcome.stdout()).unwrap();
    assert_eq!(json["script"], "tree.cfg");
    assert_eq!(json["commands"], 4);
    assert_eq!(json["depth"], 1);
    assert_eq!(json["nodes"][1]["children"][1]["kind"], "fail");
}

#[test]
fn check_reports_parse_errors() {
    let project = Project::empty();
    project.file("bad.cfg", "print message=a\n}\n");

    project
        .cmdconf()
        .args(&["check", "bad.cfg"])
        .fails()
        .stderr_has("bad.cfg: line 2");
}
