// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in command kinds

mod clear;
mod delay;
mod fail;
mod print;

pub use clear::ClearCommand;
pub use delay::DelayCommand;
pub use fail::FailCommand;
pub use print::PrintCommand;

use crate::{CancelToken, SharedSink};
use cmdconf_core::CommandRegistry;

/// Registry with `print`, `delay`, `clear` and `fail`
///
/// Every command built from it writes to `sink` and honours `cancel`.
pub fn builtin_registry(sink: SharedSink, cancel: CancelToken) -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    {
        let (sink, cancel) = (sink.clone(), cancel.clone());
        registry.register_configurable(PrintCommand::KIND, move || {
            PrintCommand::new(sink.clone(), cancel.clone())
        });
    }
    {
        let cancel = cancel.clone();
        registry.register_configurable(DelayCommand::KIND, move || {
            DelayCommand::new(cancel.clone())
        });
    }
    {
        let cancel = cancel.clone();
        registry.register(ClearCommand::KIND, move || {
            ClearCommand::new(sink.clone(), cancel.clone())
        });
    }
    registry.register_configurable(FailCommand::KIND, FailCommand::default);

    registry
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
