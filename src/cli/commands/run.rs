//! Run command implementation.
//!
//! The `toolpick run` command (also the default with no subcommand) shows
//! a checklist per category, then loops over an action menu until the user
//! quits. Without a terminal it performs the single action named by
//! `TOOLPICK_PROMPT_ACTION` and exits.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::cli::args::RunArgs;
use crate::config::{Category, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use crate::script::DEFAULT_SCRIPT_NAME;
use crate::shell::{DetachedProcess, SystemProcess, TerminalLauncher};
use crate::state::AppState;
use crate::ui::{Prompt, PromptOption, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::loading::{load_preferences, open_catalog, EXIT_CONFIG_NOT_FOUND};

const EMPTY_SELECTION: &str = "Please select at least one tool";

/// Entries of the action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Generate,
    Save,
    Launch,
    Edit,
    Clear,
    ToggleStartup,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::Generate,
        MenuAction::Save,
        MenuAction::Launch,
        MenuAction::Edit,
        MenuAction::Clear,
        MenuAction::ToggleStartup,
        MenuAction::Quit,
    ];

    /// Value used in prompts and `TOOLPICK_PROMPT_ACTION`.
    pub fn key(&self) -> &'static str {
        match self {
            MenuAction::Generate => "generate",
            MenuAction::Save => "save",
            MenuAction::Launch => "launch",
            MenuAction::Edit => "edit",
            MenuAction::Clear => "clear",
            MenuAction::ToggleStartup => "startup",
            MenuAction::Quit => "quit",
        }
    }

    fn label(&self, hidden_on_startup: bool) -> &'static str {
        match self {
            MenuAction::Generate => "Generate & preview script",
            MenuAction::Save => "Save script to file",
            MenuAction::Launch => "Run script in a new terminal",
            MenuAction::Edit => "Edit selections",
            MenuAction::Clear => "Clear all selections",
            MenuAction::ToggleStartup if hidden_on_startup => "Show this app on startup",
            MenuAction::ToggleStartup => "Don't show this app on startup",
            MenuAction::Quit => "Quit",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == key.trim())
    }
}

/// The run command implementation.
pub struct RunCommand {
    ctx: CommandContext,
    args: RunArgs,
    launcher: TerminalLauncher,
    process: Box<dyn DetachedProcess>,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(ctx: CommandContext, args: RunArgs) -> Self {
        Self {
            ctx,
            args,
            launcher: TerminalLauncher::new(),
            process: Box::new(SystemProcess),
        }
    }

    /// Use a different launcher and process spawner for "run in terminal".
    pub fn with_launcher(
        mut self,
        launcher: TerminalLauncher,
        process: Box<dyn DetachedProcess>,
    ) -> Self {
        self.launcher = launcher;
        self.process = process;
        self
    }

    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    /// Show one checklist per category and apply the answers.
    fn edit_selections(&self, state: &mut AppState, ui: &mut dyn UserInterface) -> Result<()> {
        let categories: Vec<Category> = state.catalog().categories.clone();
        let keys = category_prompt_keys(&categories);

        for (category, key) in categories
            .iter()
            .zip(&keys)
            .filter(|(c, _)| !c.tools.is_empty())
        {
            let options: Vec<PromptOption> = category
                .tools
                .iter()
                .map(|t| PromptOption::new(&t.id, &t.label))
                .collect();
            let checked: Vec<&str> = category
                .tools
                .iter()
                .filter(|t| state.is_selected(&t.id))
                .map(|t| t.id.as_str())
                .collect();

            let question = if category.description.is_empty() {
                category.name.clone()
            } else {
                format!("{}: {}", category.name, category.description)
            };
            let prompt = Prompt::multi_select(key, &question, options, &checked);

            let chosen = ui.prompt(&prompt)?.into_strings();
            for tool in &category.tools {
                if chosen.contains(&tool.id) {
                    state.select(&tool.id);
                } else {
                    state.deselect(&tool.id);
                }
            }
        }

        let count = state.selection().len();
        ui.message(&format!(
            "{} tool{} selected",
            count,
            if count == 1 { "" } else { "s" }
        ));
        Ok(())
    }

    fn ask_action(&self, state: &AppState, ui: &mut dyn UserInterface) -> Result<MenuAction> {
        let hidden = state.preferences().hide_on_startup();
        let options = MenuAction::ALL
            .iter()
            .map(|a| PromptOption::new(a.key(), a.label(hidden)))
            .collect();
        let mut prompt = Prompt::select("action", "What would you like to do?", options);
        if !ui.is_interactive() {
            prompt.default = Some(MenuAction::Generate.key().to_string());
        }

        let answer = ui.prompt(&prompt)?.as_string();
        Ok(MenuAction::from_key(&answer).unwrap_or_else(|| {
            tracing::warn!("Unknown action '{}', quitting", answer);
            MenuAction::Quit
        }))
    }

    /// Perform one action. Returns `false` when the user quits.
    fn perform(
        &self,
        action: MenuAction,
        state: &mut AppState,
        ui: &mut dyn UserInterface,
    ) -> Result<bool> {
        tracing::debug!("Menu action: {:?}", action);

        match action {
            MenuAction::Generate => {
                if !state.has_selection() {
                    ui.warning(EMPTY_SELECTION);
                    return Ok(true);
                }
                let count = state.selection().len();
                let script = state.generate_script().to_string();
                ui.show_script(&script);
                ui.success(&format!("Generated script for {} tool(s)", count));
            }
            MenuAction::Save => {
                if !state.has_selection() {
                    ui.warning(EMPTY_SELECTION);
                    return Ok(true);
                }
                let answer = ui
                    .prompt(&Prompt::input(
                        "save_path",
                        "Save script as",
                        Some(DEFAULT_SCRIPT_NAME),
                    ))?
                    .as_string();
                let answer = answer.trim();
                if answer.is_empty() {
                    ui.message("Save cancelled");
                    return Ok(true);
                }
                let path = self.ctx.resolve(&PathBuf::from(answer));
                match state.save_script(&path) {
                    Ok(written) => {
                        ui.success(&format!("Saved script to {}", written.display()));
                        ui.message(&format!("Run it with: sudo -E {}", written.display()));
                    }
                    Err(e) => ui.error(&e.to_string()),
                }
            }
            MenuAction::Launch => {
                if !state.has_selection() {
                    ui.warning(EMPTY_SELECTION);
                    return Ok(true);
                }
                let confirmed = ui
                    .prompt(&Prompt::confirm(
                        "confirm_launch",
                        "Run the script with sudo in a new terminal?",
                        true,
                    ))?
                    .as_bool()
                    .unwrap_or(false);
                if !confirmed {
                    return Ok(true);
                }
                match state.launch_script(&self.launcher, self.process.as_ref()) {
                    Ok(report) => ui.success(&format!(
                        "Started {} running {}",
                        report.terminal.program(),
                        report.script_path.display()
                    )),
                    Err(e) => ui.error(&e.to_string()),
                }
            }
            MenuAction::Edit => self.edit_selections(state, ui)?,
            MenuAction::Clear => {
                state.clear_selection();
                ui.success("Cleared all selections");
            }
            MenuAction::ToggleStartup => {
                let hide = !state.preferences().hide_on_startup();
                if let Err(e) = state.set_hide_on_startup(hide) {
                    ui.warning(&format!("Could not save preferences: {}", e));
                }
                if hide {
                    ui.success("toolpick will not be shown on startup (use --show to open it)");
                } else {
                    ui.success("toolpick will be shown on startup");
                }
            }
            MenuAction::Quit => return Ok(false),
        }

        Ok(true)
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(catalog) = open_catalog(&self.ctx, ui)? else {
            return Ok(CommandResult::failure(EXIT_CONFIG_NOT_FOUND));
        };
        let preferences = load_preferences(&self.ctx, ui);

        if preferences.hide_on_startup() && !self.args.show {
            tracing::info!("hide_on_startup is set; exiting");
            ui.message("Startup is disabled in preferences. Use --show to open anyway.");
            return Ok(CommandResult::success());
        }

        let mut state = AppState::new(catalog, preferences, self.ctx.preferences_path.clone());

        let catalog = state.catalog();
        ui.show_welcome(
            catalog.title(),
            catalog.subtitle.as_deref(),
            catalog.app_version.as_deref(),
        );

        if catalog.tool_count() == 0 {
            ui.warning(&format!(
                "The catalog has no tools. Add some to {}.",
                self.ctx
                    .config_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string())
            ));
            return Ok(CommandResult::success());
        }

        self.edit_selections(&mut state, ui)?;

        if !ui.is_interactive() {
            let action = self.ask_action(&state, ui)?;
            self.perform(action, &mut state, ui)?;
            return Ok(CommandResult::success());
        }

        loop {
            let action = self.ask_action(&state, ui)?;
            if !self.perform(action, &mut state, ui)? {
                break;
            }
        }

        Ok(CommandResult::success())
    }
}

/// Prompt key for a category's checklist: `select_<name>`, lowercased with
/// anything other than letters and digits turned into `_`.
pub fn category_prompt_key(name: &str) -> String {
    let slug: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("select_{}", slug)
}

/// Prompt keys for every category, in order. A name whose key is already
/// taken gets its 1-based position appended, e.g. `select_dev_tools_3`.
pub fn category_prompt_keys(categories: &[Category]) -> Vec<String> {
    let mut used = HashSet::new();
    categories
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let base = category_prompt_key(&category.name);
            let key = if used.contains(&base) {
                format!("{}_{}", base, index + 1)
            } else {
                base
            };
            used.insert(key.clone());
            key
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Preferences;
    use crate::ui::MockUI;
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;
    use std::rc::Rc;
    use tempfile::TempDir;

    const CATALOG: &str = r#"
app_name: Dev Setup
subtitle: Pick your tools
app_version: "1.2"
categories:
  - name: Languages
    description: Runtimes and compilers
    options:
      - id: node
        label: Node.js
        script: apt-get install -y nodejs
      - id: python
        label: Python
        script: apt-get install -y python3
  - name: Editors
    options:
      - id: vim
        label: Vim
        script: apt-get install -y vim
"#;

    fn setup() -> (TempDir, CommandContext) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.yaml"), CATALOG).unwrap();
        let ctx = CommandContext::new(temp.path())
            .with_preferences_path(temp.path().join("user_settings.ini"));
        (temp, ctx)
    }

    fn interactive_ui() -> MockUI {
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.set_prompt_limit(50);
        ui
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<PathBuf>>>);

    impl DetachedProcess for Recorder {
        fn spawn_detached(&self, program: &Path, _args: &[String]) -> std::io::Result<()> {
            self.0.borrow_mut().push(program.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn category_prompt_key_slugs_names() {
        assert_eq!(category_prompt_key("Languages"), "select_languages");
        assert_eq!(category_prompt_key("Dev Tools & IDEs"), "select_dev_tools___ides");
    }

    #[test]
    fn colliding_category_names_get_distinct_keys() {
        let category = |name: &str| Category {
            name: name.to_string(),
            description: String::new(),
            tools: Vec::new(),
        };
        let keys = category_prompt_keys(&[
            category("Dev Tools"),
            category("Go"),
            category("Dev-Tools"),
        ]);
        assert_eq!(keys, ["select_dev_tools", "select_go", "select_dev_tools_3"]);
    }

    #[test]
    fn colliding_categories_are_answered_separately() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("config.yaml"),
            r#"
categories:
  - name: Dev Tools
    options:
      - {id: gcc, label: GCC, script: apt-get install -y g++}
  - name: Dev-Tools
    options:
      - {id: mono, label: Mono, script: apt-get install -y mono-complete}
"#,
        )
        .unwrap();
        let ctx = CommandContext::new(temp.path())
            .with_preferences_path(temp.path().join("user_settings.ini"));
        let mut ui = interactive_ui();
        ui.set_prompt_response("select_dev_tools", "gcc");
        ui.set_prompt_response("select_dev_tools_2", "mono");
        ui.queue_prompt_responses("action", vec!["generate", "quit"]);

        RunCommand::new(ctx, RunArgs::default()).execute(&mut ui).unwrap();

        assert_eq!(
            ui.prompts_shown(),
            ["select_dev_tools", "select_dev_tools_2", "action", "action"]
        );
        let script = &ui.scripts()[0];
        assert!(script.contains("apt-get install -y g++"));
        assert!(script.contains("apt-get install -y mono-complete"));
    }

    #[test]
    fn menu_action_keys_round_trip() {
        for action in MenuAction::ALL {
            assert_eq!(MenuAction::from_key(action.key()), Some(action));
        }
        assert_eq!(MenuAction::from_key("nope"), None);
    }

    #[test]
    fn missing_catalog_exits_with_code_two() {
        let temp = TempDir::new().unwrap();
        let ctx = CommandContext::new(temp.path());
        let mut ui = interactive_ui();

        let result = RunCommand::new(ctx, RunArgs::default()).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn shows_welcome_banner() {
        let (_temp, ctx) = setup();
        let mut ui = interactive_ui();
        ui.set_prompt_response("action", "quit");

        RunCommand::new(ctx, RunArgs::default()).execute(&mut ui).unwrap();

        assert_eq!(ui.headers(), ["Dev Setup"]);
        assert!(ui.has_message("Pick your tools"));
        assert!(ui.has_message("Version 1.2"));
    }

    #[test]
    fn one_checklist_per_category() {
        let (_temp, ctx) = setup();
        let mut ui = interactive_ui();
        ui.set_prompt_response("action", "quit");

        RunCommand::new(ctx, RunArgs::default()).execute(&mut ui).unwrap();

        assert_eq!(
            ui.prompts_shown(),
            ["select_languages", "select_editors", "action"]
        );
    }

    #[test]
    fn generate_previews_selected_snippets_in_catalog_order() {
        let (_temp, ctx) = setup();
        let mut ui = interactive_ui();
        ui.set_prompt_response("select_languages", "python");
        ui.set_prompt_response("select_editors", "vim");
        ui.queue_prompt_responses("action", vec!["generate", "quit"]);

        RunCommand::new(ctx, RunArgs::default()).execute(&mut ui).unwrap();

        let script = &ui.scripts()[0];
        let python = script.find("apt-get install -y python3").unwrap();
        let vim = script.find("apt-get install -y vim").unwrap();
        assert!(python < vim);
        assert!(!script.contains("nodejs"));
        assert!(ui.has_success("2 tool(s)"));
    }

    #[test]
    fn generate_with_empty_selection_warns() {
        let (_temp, ctx) = setup();
        let mut ui = interactive_ui();
        ui.queue_prompt_responses("action", vec!["generate", "quit"]);

        RunCommand::new(ctx, RunArgs::default()).execute(&mut ui).unwrap();

        assert!(ui.has_warning("Please select at least one tool"));
        assert!(ui.scripts().is_empty());
    }

    #[test]
    fn save_writes_script_relative_to_working_dir() {
        let (temp, ctx) = setup();
        let mut ui = interactive_ui();
        ui.set_prompt_response("select_editors", "vim");
        ui.set_prompt_response("save_path", "out.sh");
        ui.queue_prompt_responses("action", vec!["save", "quit"]);

        RunCommand::new(ctx, RunArgs::default()).execute(&mut ui).unwrap();

        let script = fs::read_to_string(temp.path().join("out.sh")).unwrap();
        assert!(script.contains("apt-get install -y vim"));
        assert!(ui.has_success("Saved script"));
    }

    #[test]
    fn save_failure_is_reported_and_menu_continues() {
        let (_temp, ctx) = setup();
        let mut ui = interactive_ui();
        ui.set_prompt_response("select_editors", "vim");
        ui.set_prompt_response("save_path", "missing/dir/out.sh");
        ui.queue_prompt_responses("action", vec!["save", "generate", "quit"]);

        RunCommand::new(ctx, RunArgs::default()).execute(&mut ui).unwrap();

        assert!(ui.has_error("Failed to write script"));
        assert_eq!(ui.scripts().len(), 1);
    }

    #[test]
    fn clear_then_edit_reprompts_categories() {
        let (_temp, ctx) = setup();
        let mut ui = interactive_ui();
        ui.queue_prompt_responses("select_editors", vec!["vim", ""]);
        ui.queue_prompt_responses("action", vec!["clear", "edit", "generate", "quit"]);

        RunCommand::new(ctx, RunArgs::default()).execute(&mut ui).unwrap();

        assert!(ui.has_success("Cleared all selections"));
        assert!(ui.has_warning("Please select at least one tool"));
    }

    #[test]
    fn toggle_startup_saves_preference() {
        let (temp, ctx) = setup();
        let mut ui = interactive_ui();
        ui.queue_prompt_responses("action", vec!["startup", "quit"]);

        RunCommand::new(ctx, RunArgs::default()).execute(&mut ui).unwrap();

        let prefs = Preferences::load(&temp.path().join("user_settings.ini")).unwrap();
        assert!(prefs.hide_on_startup());
    }

    #[test]
    fn hidden_on_startup_exits_early() {
        let (temp, ctx) = setup();
        let mut prefs = Preferences::default();
        prefs.set_hide_on_startup(true);
        prefs.save(&temp.path().join("user_settings.ini")).unwrap();
        let mut ui = interactive_ui();

        let result = RunCommand::new(ctx, RunArgs::default()).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn show_flag_overrides_hidden_on_startup() {
        let (temp, ctx) = setup();
        let mut prefs = Preferences::default();
        prefs.set_hide_on_startup(true);
        prefs.save(&temp.path().join("user_settings.ini")).unwrap();
        let mut ui = interactive_ui();
        ui.set_prompt_response("action", "quit");

        RunCommand::new(ctx, RunArgs { show: true })
            .execute(&mut ui)
            .unwrap();

        assert!(ui.prompts_shown().contains(&"action".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn launch_spawns_terminal() {
        use std::os::unix::fs::PermissionsExt;

        let (temp, ctx) = setup();
        let bin = temp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        let xterm = bin.join("xterm");
        fs::write(&xterm, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&xterm, fs::Permissions::from_mode(0o755)).unwrap();

        let launcher = TerminalLauncher::new()
            .with_script_path(temp.path().join("launch.sh"))
            .with_search_path(bin.into_os_string())
            .with_elevated(false);
        let recorder = Recorder::default();

        let mut ui = interactive_ui();
        ui.set_prompt_response("select_editors", "vim");
        ui.queue_prompt_responses("action", vec!["launch", "quit"]);

        RunCommand::new(ctx, RunArgs::default())
            .with_launcher(launcher, Box::new(recorder.clone()))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(recorder.0.borrow().as_slice(), [xterm]);
        assert!(ui.has_success("Started xterm"));
        assert!(fs::read_to_string(temp.path().join("launch.sh"))
            .unwrap()
            .contains("-y vim"));
    }

    #[test]
    fn launch_without_terminal_reports_error() {
        let (temp, ctx) = setup();
        let launcher = TerminalLauncher::new()
            .with_script_path(temp.path().join("launch.sh"))
            .with_search_path(temp.path().join("empty").into_os_string());

        let mut ui = interactive_ui();
        ui.set_prompt_response("select_editors", "vim");
        ui.queue_prompt_responses("action", vec!["launch", "quit"]);

        let result = RunCommand::new(ctx, RunArgs::default())
            .with_launcher(launcher, Box::new(Recorder::default()))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_error("sudo -E"));
    }

    #[test]
    fn non_interactive_performs_one_action() {
        let (_temp, ctx) = setup();
        let mut ui = MockUI::new();
        ui.set_prompt_response("select_languages", "node");

        RunCommand::new(ctx, RunArgs::default()).execute(&mut ui).unwrap();

        assert_eq!(ui.scripts().len(), 1);
        assert_eq!(ui.prompts_shown().last().map(String::as_str), Some("action"));
    }

    #[test]
    fn empty_catalog_warns_and_exits() {
        let (temp, ctx) = setup();
        fs::write(temp.path().join("config.yaml"), "categories: []\n").unwrap();
        let mut ui = interactive_ui();

        let result = RunCommand::new(ctx, RunArgs::default()).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("no tools"));
    }
}
