//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use toolpick::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Developer Environment Setup");
//! ui.success("Script saved");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, SpinnerStatus};
pub use non_interactive::{NonInteractiveUI, PROMPT_ENV_PREFIX};
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ToolpickTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show the welcome banner: title, optional subtitle and version.
    fn show_welcome(&mut self, title: &str, subtitle: Option<&str>, version: Option<&str>) {
        self.show_header(title);
        if let Some(subtitle) = subtitle {
            self.message(subtitle);
        }
        if let Some(version) = version {
            self.message(&format!("Version {}", version));
        }
    }

    /// Show a generated script for review.
    fn show_script(&mut self, script: &str) {
        self.message(script);
    }

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;

    /// Change the output mode.
    fn set_output_mode(&mut self, mode: OutputMode);
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and test responses).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    ///
    /// For multi-select prompts this is a comma-separated list of values.
    pub default: Option<String>,
}

impl Prompt {
    /// Yes/no question.
    pub fn confirm(key: &str, question: &str, default: bool) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Confirm,
            default: Some(default.to_string()),
        }
    }

    /// Free text input.
    pub fn input(key: &str, question: &str, default: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input,
            default: default.map(String::from),
        }
    }

    /// Pick one option.
    pub fn select(key: &str, question: &str, options: Vec<PromptOption>) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Select { options },
            default: None,
        }
    }

    /// Pick any number of options; `checked` values start selected.
    pub fn multi_select(
        key: &str,
        question: &str,
        options: Vec<PromptOption>,
        checked: &[&str],
    ) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::MultiSelect { options },
            default: Some(checked.join(",")),
        }
    }
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Free-form text input.
    Input,
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
    /// Select multiple from a list of options.
    MultiSelect { options: Vec<PromptOption> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

impl PromptOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Result of a prompt.
#[derive(Debug, Clone)]
pub enum PromptResult {
    /// Boolean result from confirm.
    Bool(bool),
    /// String result from input or select.
    String(String),
    /// Multiple string results from multi-select.
    Strings(Vec<String>),
}

impl PromptResult {
    /// Get as a single string.
    pub fn as_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::String(s) => s.clone(),
            Self::Strings(v) => v.join(","),
        }
    }

    /// Get as bool if this is a Bool result.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as a list of values. Empty strings are dropped.
    pub fn into_strings(self) -> Vec<String> {
        match self {
            Self::Strings(v) => v.into_iter().filter(|s| !s.is_empty()).collect(),
            Self::String(s) if s.is_empty() => Vec::new(),
            Self::String(s) => vec![s],
            Self::Bool(b) => vec![b.to_string()],
        }
    }
}

/// Split a comma-separated answer into trimmed, non-empty values.
pub(crate) fn split_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Read a yes/no answer the way users type it.
pub(crate) fn parse_confirm(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "true" | "yes" | "y" | "1" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_result_as_string() {
        assert_eq!(PromptResult::Bool(true).as_string(), "true");
        assert_eq!(PromptResult::String("hello".to_string()).as_string(), "hello");
        assert_eq!(
            PromptResult::Strings(vec!["a".to_string(), "b".to_string()]).as_string(),
            "a,b"
        );
    }

    #[test]
    fn prompt_result_as_bool() {
        assert_eq!(PromptResult::Bool(true).as_bool(), Some(true));
        assert_eq!(PromptResult::String("test".to_string()).as_bool(), None);
    }

    #[test]
    fn into_strings_drops_empty_values() {
        let result = PromptResult::Strings(vec![String::new(), "vim".to_string()]);
        assert_eq!(result.into_strings(), ["vim"]);
        assert!(PromptResult::String(String::new()).into_strings().is_empty());
    }

    #[test]
    fn multi_select_default_lists_checked_values() {
        let prompt = Prompt::multi_select(
            "editors",
            "Editors",
            vec![PromptOption::new("vim", "Vim"), PromptOption::new("code", "VS Code")],
            &["vim", "code"],
        );
        assert_eq!(prompt.default.as_deref(), Some("vim,code"));
        assert!(matches!(prompt.prompt_type, PromptType::MultiSelect { ref options } if options.len() == 2));
    }

    #[test]
    fn confirm_default_is_textual_bool() {
        let prompt = Prompt::confirm("quit", "Quit?", false);
        assert_eq!(prompt.default.as_deref(), Some("false"));
    }

    #[test]
    fn split_values_trims_and_skips_blanks() {
        assert_eq!(split_values(" vim, ,git "), ["vim", "git"]);
        assert!(split_values("").is_empty());
    }

    #[test]
    fn parse_confirm_accepts_common_spellings() {
        assert!(parse_confirm("Yes"));
        assert!(parse_confirm("y"));
        assert!(parse_confirm("1"));
        assert!(!parse_confirm("no"));
        assert!(!parse_confirm(""));
    }
}
