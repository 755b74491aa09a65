//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// toolpick - Pick development tools and generate an installation script.
#[derive(Debug, Parser)]
#[command(name = "toolpick")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the tool catalog (default: ./config.yaml)
    #[arg(short, long, global = true, env = "TOOLPICK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the preferences file (default: per-user config dir)
    #[arg(long, global = true, env = "TOOLPICK_PREFERENCES")]
    pub preferences: Option<PathBuf>,

    /// Download the latest catalog from this URL before loading
    #[arg(long, global = true, value_name = "URL", env = "TOOLPICK_CONFIG_URL")]
    pub update_from: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pick tools interactively (default if no command specified)
    Run(RunArgs),

    /// Generate a script for the given tools without prompting
    Generate(GenerateArgs),

    /// List categories and tools in the catalog
    List(ListArgs),

    /// Write a starter catalog
    Init(InitArgs),

    /// Show or change preferences
    Prefs(PrefsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Show the app even if "don't show on startup" is set
    #[arg(long)]
    pub show: bool,
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenerateArgs {
    /// Tool ids to include (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub select: Vec<String>,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing catalog
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `prefs` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PrefsArgs {
    /// Skip the interactive app on startup (true/false)
    #[arg(long, value_name = "BOOL", value_parser = parse_bool_arg)]
    pub hide_on_startup: Option<bool>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

fn parse_bool_arg(raw: &str) -> Result<bool, String> {
    crate::state::parse_bool(raw).ok_or_else(|| format!("expected true or false, got '{}'", raw))
}
