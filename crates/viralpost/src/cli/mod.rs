//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the viralpost binary.

mod commands;
mod config;
mod generate;

pub use commands::{Cli, Commands, ConfigCommands};
pub use config::show_config;
pub use generate::run_generate;
