//! Prefs command implementation.
//!
//! The `toolpick prefs` command shows the preferences file and, with
//! `--hide-on-startup`, changes it.

use crate::cli::args::PrefsArgs;
use crate::error::{Result, ToolpickError};
use crate::state::{Preferences, GENERAL_SECTION, HIDE_ON_STARTUP};
use crate::ui::theme::ToolpickTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The prefs command implementation.
pub struct PrefsCommand {
    ctx: CommandContext,
    args: PrefsArgs,
}

impl PrefsCommand {
    /// Create a new prefs command.
    pub fn new(ctx: CommandContext, args: PrefsArgs) -> Self {
        Self { ctx, args }
    }

    pub fn args(&self) -> &PrefsArgs {
        &self.args
    }
}

impl Command for PrefsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let path = self
            .ctx
            .preferences_path
            .as_ref()
            .ok_or_else(|| ToolpickError::PreferencesError {
                path: Default::default(),
                message: "no per-user config directory; pass --preferences".to_string(),
            })?;

        let mut prefs = Preferences::load(path)?;

        if let Some(hide) = self.args.hide_on_startup {
            prefs.set_hide_on_startup(hide);
            prefs.save(path)?;
            ui.success(&format!("Set {} = {}", HIDE_ON_STARTUP, hide));
        }

        let theme = ToolpickTheme::detect();
        ui.message(&format!(
            "{} {}",
            theme.key.apply_to("Preferences:"),
            path.display()
        ));
        ui.message(&format!(
            "  [{}] {} = {}",
            GENERAL_SECTION,
            HIDE_ON_STARTUP,
            prefs.hide_on_startup()
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn context(temp: &TempDir) -> CommandContext {
        CommandContext::new(temp.path()).with_preferences_path(temp.path().join("prefs.ini"))
    }

    #[test]
    fn shows_defaults() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        PrefsCommand::new(context(&temp), PrefsArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("hide_on_startup = false"));
        assert!(!temp.path().join("prefs.ini").exists());
    }

    #[test]
    fn sets_hide_on_startup() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        PrefsCommand::new(
            context(&temp),
            PrefsArgs {
                hide_on_startup: Some(true),
            },
        )
        .execute(&mut ui)
        .unwrap();

        assert!(ui.has_success("hide_on_startup = true"));
        let prefs = Preferences::load(&temp.path().join("prefs.ini")).unwrap();
        assert!(prefs.hide_on_startup());
    }
}
