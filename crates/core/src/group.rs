// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command groups and the sequential chaining driver

use crate::{AsyncCommand, CommandError};
use async_trait::async_trait;
use std::fmt;
use tracing::Instrument;

/// Execution state of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    Idle,
    /// Running the child at this index
    Running(usize),
    Completed,
}

/// What a node holds
pub enum NodeBody {
    Leaf(Box<dyn AsyncCommand>),
    Group(CommandGroup),
}

/// A child of a group, tagged with the kind and source line it came from
pub struct Node {
    kind: String,
    line: usize,
    body: NodeBody,
}

impl Node {
    pub fn leaf(kind: impl Into<String>, line: usize, command: Box<dyn AsyncCommand>) -> Self {
        Self {
            kind: kind.into(),
            line,
            body: NodeBody::Leaf(command),
        }
    }

    pub fn group(line: usize, group: CommandGroup) -> Self {
        Self {
            kind: CommandGroup::KIND.to_string(),
            line,
            body: NodeBody::Group(group),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn body(&self) -> &NodeBody {
        &self.body
    }

    pub fn as_group(&self) -> Option<&CommandGroup> {
        match &self.body {
            NodeBody::Group(group) => Some(group),
            NodeBody::Leaf(_) => None,
        }
    }

    pub fn is_group(&self) -> bool {
        self.as_group().is_some()
    }

    async fn run(&mut self) -> Result<(), CommandError> {
        match &mut self.body {
            NodeBody::Leaf(command) => command.run().await,
            NodeBody::Group(group) => group.run().await,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Node");
        s.field("kind", &self.kind).field("line", &self.line);
        if let NodeBody::Group(group) = &self.body {
            s.field("children", &group.children);
        }
        s.finish()
    }
}

/// An ordered sequence of commands run one after another
///
/// A group completes when its last child completes, or as soon as any child
/// fails. Groups run at most once, even when an earlier run was abandoned
/// partway through.
#[derive(Debug)]
pub struct CommandGroup {
    children: Vec<Node>,
    state: GroupState,
}

impl Default for CommandGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandGroup {
    /// Kind name reported for nested groups
    pub const KIND: &'static str = "group";

    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            state: GroupState::Idle,
        }
    }

    /// Append a child; insertion order is execution order
    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn state(&self) -> GroupState {
        self.state
    }

    /// Maximum nesting level below this group (0 when no child is a group)
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .filter_map(Node::as_group)
            .map(|g| g.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Number of leaf commands in this group and all nested groups
    pub fn command_count(&self) -> usize {
        self.children
            .iter()
            .map(|node| match node.as_group() {
                Some(group) => group.command_count(),
                None => 1,
            })
            .sum()
    }

    /// Run the group and hand the outcome to `on_complete`
    ///
    /// The callback is invoked exactly once, after the last command finishes
    /// or as soon as one fails.
    pub async fn run_then<F>(&mut self, on_complete: F)
    where
        F: FnOnce(Result<(), CommandError>) + Send,
    {
        let result = self.run().await;
        on_complete(result);
    }
}

#[async_trait]
impl AsyncCommand for CommandGroup {
    async fn run(&mut self) -> Result<(), CommandError> {
        match self.state {
            GroupState::Idle => {}
            GroupState::Running(_) => return Err(CommandError::AlreadyStarted),
            GroupState::Completed => return Err(CommandError::AlreadyCompleted),
        }

        for index in 0..self.children.len() {
            self.state = GroupState::Running(index);
            let node = &mut self.children[index];

            let span = tracing::info_span!("command", kind = %node.kind, line = node.line);
            span.in_scope(|| tracing::debug!("starting"));

            let start = std::time::Instant::now();
            let result = node.run().instrument(span.clone()).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match result {
                Ok(()) => span.in_scope(|| tracing::debug!(elapsed_ms, "completed")),
                Err(e) => {
                    span.in_scope(|| tracing::error!(elapsed_ms, error = %e, "failed"));
                    let err = e.located(&node.kind, node.line);
                    self.state = GroupState::Completed;
                    return Err(err);
                }
            }
        }

        self.state = GroupState::Completed;
        Ok(())
    }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
