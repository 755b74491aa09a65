//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_user, NonInteractiveUI, OutputMode, ProgressSpinner, Prompt, PromptResult,
    SpinnerHandle, ToolpickTheme, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: ToolpickTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            term: Term::stdout(),
            theme: ToolpickTheme::detect(),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_welcome(&mut self, title: &str, subtitle: Option<&str>, version: Option<&str>) {
        if !self.mode.shows_status() {
            return;
        }
        writeln!(self.term).ok();
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
        if let Some(subtitle) = subtitle {
            writeln!(self.term, "  {}", subtitle).ok();
        }
        if let Some(version) = version {
            writeln!(
                self.term,
                "  {}",
                self.theme.dim.apply_to(format!("Version {}", version))
            )
            .ok();
        }
        writeln!(self.term).ok();
    }

    fn show_script(&mut self, script: &str) {
        if !self.mode.shows_status() {
            return;
        }
        let rule = self.theme.dim.apply_to("─".repeat(60));
        writeln!(self.term, "{}", rule).ok();
        for line in script.lines() {
            writeln!(self.term, "{}", self.theme.script.apply_to(line)).ok();
        }
        writeln!(self.term, "{}", rule).ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
