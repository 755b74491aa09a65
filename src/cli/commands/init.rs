//! Init command implementation.
//!
//! The `toolpick init` command writes a starter catalog.

use std::fs;

use crate::cli::args::InitArgs;
use crate::config::STARTER_CATALOG;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    ctx: CommandContext,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(ctx: CommandContext, args: InitArgs) -> Self {
        Self { ctx, args }
    }

    pub fn args(&self) -> &InitArgs {
        &self.args
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = &self.ctx.config_path;

        if path.exists() && !self.args.force {
            ui.error(&format!(
                "{} already exists. Use --force to overwrite.",
                path.display()
            ));
            return Ok(CommandResult::failure(1));
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, STARTER_CATALOG)?;
        tracing::info!("Wrote starter catalog to {}", path.display());

        ui.success(&format!("Created {}", path.display()));
        ui.message("\nNext steps:");
        ui.message("  1. Add your own categories and tools to the catalog");
        ui.message("  2. Run `toolpick` to pick tools and generate a script");

        Ok(CommandResult::success())
    }
}
