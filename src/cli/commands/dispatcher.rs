//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for the paths and URL shared by every command
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::config::resolve_config_path;
use crate::error::Result;
use crate::state::Preferences;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Locations resolved from global flags.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Directory relative paths are resolved against.
    pub working_dir: PathBuf,
    /// Catalog file.
    pub config_path: PathBuf,
    /// Preferences file, if one could be determined.
    pub preferences_path: Option<PathBuf>,
    /// URL to refresh the catalog from before loading.
    pub update_url: Option<String>,
}

impl CommandContext {
    /// Context with default locations under `working_dir`.
    pub fn new(working_dir: &Path) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: resolve_config_path(None, working_dir),
            preferences_path: Preferences::default_path(),
            update_url: None,
        }
    }

    /// Resolve the global flags against `working_dir`.
    pub fn from_cli(cli: &Cli, working_dir: &Path) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config_path: resolve_config_path(cli.config.as_deref(), working_dir),
            preferences_path: cli
                .preferences
                .as_ref()
                .map(|p| working_dir.join(p))
                .or_else(Preferences::default_path),
            update_url: cli.update_from.clone().filter(|u| !u.trim().is_empty()),
        }
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    pub fn with_preferences_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preferences_path = Some(path.into());
        self
    }

    pub fn with_update_url(mut self, url: impl Into<String>) -> Self {
        self.update_url = Some(url.into());
        self
    }

    /// Resolve a user-supplied path against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.working_dir.join(path)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher rooted at `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = CommandContext::from_cli(cli, &self.working_dir);
        tracing::debug!("Resolved context: {:?}", ctx);

        match &cli.command {
            Some(Commands::Run(args)) => super::run::RunCommand::new(ctx, args.clone()).execute(ui),
            Some(Commands::Generate(args)) => {
                super::generate::GenerateCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::List(args)) => {
                super::list::ListCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Init(args)) => {
                super::init::InitCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Prefs(args)) => {
                super::prefs::PrefsCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            // Default to the interactive picker
            None => super::run::RunCommand::new(ctx, RunArgs::default()).execute(ui),
        }
    }
}
