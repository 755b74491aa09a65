//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{Result, ToolpickError};

use super::theme::ToolpickTheme;
use super::{
    parse_confirm, split_values, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle,
    UserInterface,
};

/// Environment variable prefix for prompt answers, e.g.
/// `TOOLPICK_PROMPT_SAVE_PATH=/tmp/install.sh`.
pub const PROMPT_ENV_PREFIX: &str = "TOOLPICK_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `TOOLPICK_PROMPT_<KEY>` variables, then from
/// the prompt default. A prompt with neither is an error.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }

    fn answer(prompt: &Prompt, raw: &str) -> PromptResult {
        match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_confirm(raw)),
            PromptType::MultiSelect { .. } => PromptResult::Strings(split_values(raw)),
            _ => PromptResult::String(raw.to_string()),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            tracing::debug!("Answering '{}' from {}", prompt.key, env_key);
            return Ok(Self::answer(prompt, value));
        }

        if let Some(default) = &prompt.default {
            return Ok(Self::answer(prompt, default));
        }

        Err(ToolpickError::ConfigValidationError {
            message: format!(
                "Cannot prompt for '{}' in non-interactive mode (set {})",
                prompt.key, env_key
            ),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            eprintln!("  {}", message);
        }
        Box::new(NoopSpinner {
            quiet: !self.mode.shows_status(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}

/// Spinner that only prints its final status, on stderr so piped stdout
/// stays clean.
struct NoopSpinner {
    quiet: bool,
}

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if !self.quiet {
            eprintln!("{}", ToolpickTheme::plain().format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", ToolpickTheme::plain().format_error(msg));
    }
}
