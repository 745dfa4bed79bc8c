// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command kind registry

use crate::{AsyncCommand, ConfigError, Configurable, Params};
use std::collections::HashMap;
use std::sync::Arc;

type Constructor =
    Arc<dyn Fn(&Params) -> Result<Box<dyn AsyncCommand>, ConfigError> + Send + Sync>;

/// Name → constructor table consulted while parsing
///
/// Registering a new kind is the only thing needed to make it available to
/// the parser. Registries are plain values, so parsers with different command
/// sets can coexist.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    constructors: HashMap<String, Constructor>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kind that takes no parameters
    pub fn register<C, F>(&mut self, kind: impl Into<String>, ctor: F) -> &mut Self
    where
        C: AsyncCommand + 'static,
        F: Fn() -> C + Send + Sync + 'static,
    {
        self.insert(
            kind.into(),
            Arc::new(move |params: &Params| {
                if let Some(key) = params.keys().next() {
                    return Err(ConfigError::NotConfigurable(key.to_string()));
                }
                Ok(Box::new(ctor()) as Box<dyn AsyncCommand>)
            }),
        )
    }

    /// Register a kind that is configured from its line's parameters
    pub fn register_configurable<C, F>(&mut self, kind: impl Into<String>, ctor: F) -> &mut Self
    where
        C: AsyncCommand + Configurable + 'static,
        F: Fn() -> C + Send + Sync + 'static,
    {
        self.insert(
            kind.into(),
            Arc::new(move |params: &Params| {
                let mut command = ctor();
                command.configure(params)?;
                Ok(Box::new(command) as Box<dyn AsyncCommand>)
            }),
        )
    }

    fn insert(&mut self, kind: String, ctor: Constructor) -> &mut Self {
        if self.constructors.insert(kind.clone(), ctor).is_some() {
            tracing::warn!(kind = %kind, "command kind re-registered, replacing previous constructor");
        }
        self
    }

    /// Construct and configure a command
    ///
    /// Returns `None` when the kind is not registered.
    pub fn construct(
        &self,
        kind: &str,
        params: &Params,
    ) -> Option<Result<Box<dyn AsyncCommand>, ConfigError>> {
        self.constructors.get(kind).map(|ctor| ctor(params))
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    /// Registered kind names, sorted
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
