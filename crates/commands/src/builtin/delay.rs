// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::CancelToken;
use async_trait::async_trait;
use cmdconf_core::{AsyncCommand, CommandError, ConfigError, Configurable, Params};
use std::time::Duration;

/// `delay seconds=<n>` or `delay duration=<humantime>`: wait, then complete
///
/// The wait is a tokio timer, so the calling thread is never blocked. A
/// cancelled token ends the wait early with `CommandError::Cancelled`.
pub struct DelayCommand {
    cancel: CancelToken,
    duration: Duration,
}

impl DelayCommand {
    pub const KIND: &'static str = "delay";

    pub fn new(cancel: CancelToken) -> Self {
        Self {
            cancel,
            duration: Duration::ZERO,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Configurable for DelayCommand {
    fn configure(&mut self, params: &Params) -> Result<(), ConfigError> {
        params.deny_unknown(&["seconds", "duration"])?;

        self.duration = match (seconds(params)?, params.duration("duration")?) {
            (Some(d), None) | (None, Some(d)) => d,
            (Some(_), Some(_)) => {
                return Err(ConfigError::InvalidValue {
                    key: "duration".to_string(),
                    value: params.get("duration").unwrap_or_default().to_string(),
                    reason: "cannot be combined with seconds".to_string(),
                })
            }
            (None, None) => return Err(ConfigError::MissingParameter("seconds".to_string())),
        };
        Ok(())
    }
}

/// `seconds=` is a plain, non-negative number of seconds
fn seconds(params: &Params) -> Result<Option<Duration>, ConfigError> {
    let Some(secs) = params.parse::<f64>("seconds")? else {
        return Ok(None);
    };
    Duration::try_from_secs_f64(secs)
        .map(Some)
        .map_err(|e| ConfigError::InvalidValue {
            key: "seconds".to_string(),
            value: params.get("seconds").unwrap_or_default().to_string(),
            reason: e.to_string(),
        })
}

#[async_trait]
impl AsyncCommand for DelayCommand {
    async fn run(&mut self) -> Result<(), CommandError> {
        if self.cancel.is_cancelled() {
            return Err(CommandError::Cancelled);
        }

        tracing::debug!(duration_ms = self.duration.as_millis() as u64, "waiting");
        tokio::select! {
            _ = tokio::time::sleep(self.duration) => {}
            _ = self.cancel.cancelled() => {}
        }

        if self.cancel.is_cancelled() {
            return Err(CommandError::Cancelled);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "delay_tests.rs"]
mod tests;
