//! Generate command implementation.
//!
//! The `toolpick generate` command builds a script from tool ids given on
//! the command line, for use in scripts and CI.

use std::io::Write;

use crate::cli::args::GenerateArgs;
use crate::error::Result;
use crate::state::{AppState, Preferences};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::loading::{open_catalog, EXIT_CONFIG_NOT_FOUND};

/// The generate command implementation.
pub struct GenerateCommand {
    ctx: CommandContext,
    args: GenerateArgs,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(ctx: CommandContext, args: GenerateArgs) -> Self {
        Self { ctx, args }
    }

    pub fn args(&self) -> &GenerateArgs {
        &self.args
    }
}

impl Command for GenerateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(catalog) = open_catalog(&self.ctx, ui)? else {
            return Ok(CommandResult::failure(EXIT_CONFIG_NOT_FOUND));
        };

        // Ids typed by the user must exist; only stale session ids are dropped silently
        catalog.require_tools(self.args.select.iter().map(String::as_str))?;

        let mut state = AppState::new(catalog, Preferences::default(), None);
        state.set_selection(&self.args.select);
        if !state.has_selection() {
            ui.warning("No tools selected; the script will only contain the header");
        }

        match &self.args.output {
            Some(output) => {
                let path = self.ctx.resolve(output);
                let written = state.save_script(&path)?;
                ui.success(&format!(
                    "Wrote {} tool(s) to {}",
                    state.selection().len(),
                    written.display()
                ));
            }
            None => {
                let script = state.generate_script();
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(script.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(CommandResult::success())
    }
}
