// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Textual parameters parsed from a command line

use crate::ConfigError;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;

/// Parameter mapping for a single command invocation
///
/// Keys are unique; iteration follows key order so identical source text
/// always yields identical parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one if the key was already set
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get a value that must be present
    pub fn require(&self, key: &str) -> Result<&str, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingParameter(key.to_string()))
    }

    /// Parse an optional value with `FromStr`
    pub fn parse<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.get(key)
            .map(|raw| {
                raw.parse::<T>()
                    .map_err(|e| invalid(key, raw, e.to_string()))
            })
            .transpose()
    }

    /// Parse a value that must be present
    pub fn parse_required<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.parse(key)?
            .ok_or_else(|| ConfigError::MissingParameter(key.to_string()))
    }

    /// Parse a duration written either as seconds (`1.5`) or humantime (`250ms`)
    pub fn duration(&self, key: &str) -> Result<Option<Duration>, ConfigError> {
        let Some(raw) = self.get(key) else {
            return Ok(None);
        };

        if let Ok(secs) = raw.parse::<f64>() {
            return Duration::try_from_secs_f64(secs)
                .map(Some)
                .map_err(|e| invalid(key, raw, e.to_string()));
        }

        humantime::parse_duration(raw)
            .map(Some)
            .map_err(|e| invalid(key, raw, e.to_string()))
    }

    /// Reject any key not in `allowed`
    pub fn deny_unknown(&self, allowed: &[&str]) -> Result<(), ConfigError> {
        match self.keys().find(|k| !allowed.contains(k)) {
            Some(key) => Err(ConfigError::UnknownParameter(key.to_string())),
            None => Ok(()),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn invalid(key: &str, value: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason,
    }
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
