//! Command-line interface for toolpick.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, GenerateArgs, InitArgs, ListArgs, PrefsArgs, RunArgs,
};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
