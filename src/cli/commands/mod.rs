//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`toolpick run`, `toolpick generate`)
//! - Shared catalog and preferences loading
//! - Consistent global flag handling

pub mod completions;
pub mod dispatcher;
pub mod generate;
pub mod init;
pub mod list;
pub mod loading;
pub mod prefs;
pub mod run;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
