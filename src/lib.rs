//! toolpick - Pick development tools and generate an installation script.
//!
//! A catalog of categories and tools, each with a bash snippet, is loaded
//! from YAML. The user checks tools, and toolpick assembles the snippets
//! into one script, which can be previewed, saved, or run in a new terminal.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Catalog loading, parsing, validation, and remote updates
//! - [`error`] - Error types and result aliases
//! - [`script`] - Script assembly and writing
//! - [`shell`] - Platform probes and the terminal launcher
//! - [`state`] - Session state, selections, and preferences
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use toolpick::config::parse_catalog;
//! use toolpick::script::ScriptAssembler;
//! use toolpick::state::SelectionSet;
//!
//! let catalog = parse_catalog(
//!     "categories:\n  - name: Editors\n    options:\n      - {id: vim, label: Vim, script: apt-get install -y vim}\n",
//!     Path::new("config.yaml"),
//! )
//! .unwrap();
//!
//! let selection: SelectionSet = ["vim"].into_iter().collect();
//! let script = ScriptAssembler::default().assemble(&catalog, &selection);
//! assert!(script.starts_with("#!/usr/bin/env bash"));
//! assert!(script.contains("apt-get install -y vim"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod script;
pub mod shell;
pub mod state;
pub mod ui;

pub use error::{Result, ToolpickError};
