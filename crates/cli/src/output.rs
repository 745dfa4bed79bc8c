// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use cmdconf_core::{CommandGroup, Node};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print output in the specified format
pub fn print<T: Serialize + fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", value),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// One node of a parsed tree
#[derive(Debug, Serialize)]
pub struct NodeView {
    pub kind: String,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NodeView>>,
}

impl NodeView {
    fn from_node(node: &Node) -> Self {
        Self {
            kind: node.kind().to_string(),
            line: node.line(),
            children: node
                .as_group()
                .map(|group| group.children().iter().map(NodeView::from_node).collect()),
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{:>5}  {}{}", self.line, "  ".repeat(depth), self.kind)?;
        for child in self.children.iter().flatten() {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Summary and structure of a parsed script
#[derive(Debug, Serialize)]
pub struct TreeView {
    pub script: String,
    pub commands: usize,
    pub depth: usize,
    pub nodes: Vec<NodeView>,
}

impl TreeView {
    pub fn new(script: &str, root: &CommandGroup) -> Self {
        Self {
            script: script.to_string(),
            commands: root.command_count(),
            depth: root.depth(),
            nodes: root.children().iter().map(NodeView::from_node).collect(),
        }
    }
}

impl fmt::Display for TreeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: ok ({} commands, depth {})",
            self.script, self.commands, self.depth
        )?;
        for node in &self.nodes {
            node.write_indented(f, 0)?;
        }
        Ok(())
    }
}

/// Registered command kinds
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct KindList(pub Vec<String>);

impl fmt::Display for KindList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in &self.0 {
            writeln!(f, "{}", kind)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
