//! Visual theme and styling.

use console::Style;

/// toolpick's visual theme.
#[derive(Debug, Clone)]
pub struct ToolpickTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for category names (cyan bold).
    pub category: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for script previews (dim).
    pub script: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for ToolpickTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolpickTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            category: Style::new().cyan().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            script: Style::new().dim(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            category: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            script: Style::new(),
            key: Style::new(),
        }
    }

    /// Theme for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{} {}", self.header.apply_to("▸"), self.highlight.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_status_icons() {
        let theme = ToolpickTheme::plain();
        assert_eq!(theme.format_success("Saved"), "✓ Saved");
        assert_eq!(theme.format_warning("Careful"), "⚠ Careful");
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
    }

    #[test]
    fn theme_formats_header() {
        let msg = ToolpickTheme::plain().format_header("Dev Setup");
        assert!(msg.contains("Dev Setup"));
        assert!(msg.contains("▸"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = ToolpickTheme::default();
        let new = ToolpickTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
