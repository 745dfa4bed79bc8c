// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cmdconf-core: command contracts and the sequential group driver
//!
//! This crate provides:
//! - The runnable (`Command`, `AsyncCommand`) and `Configurable` contracts
//! - `Params`, the textual parameter mapping handed to configurable commands
//! - `CommandRegistry`, the name → constructor table consulted by the parser
//! - `CommandGroup`, the composite node that chains its children in order

mod command;
mod error;
mod group;
mod params;
mod registry;

pub use command::{AsyncCommand, Command, Configurable};
pub use error::{CommandError, ConfigError};
pub use group::{CommandGroup, GroupState, Node, NodeBody};
pub use params::Params;
pub use registry::CommandRegistry;
